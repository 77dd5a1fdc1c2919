// Screens module - one screen per tab

pub mod create;
pub mod events;
pub mod favorites;

pub use create::CreateScreen;
pub use events::EventsScreen;
pub use favorites::FavoritesScreen;
