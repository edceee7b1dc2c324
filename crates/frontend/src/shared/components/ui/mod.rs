pub mod badge;
pub mod button;
pub mod separator;

pub use badge::Badge;
pub use button::Button;
pub use separator::Separator;
