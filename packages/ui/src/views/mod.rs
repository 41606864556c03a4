mod recipes;
pub use recipes::RecipesView;
