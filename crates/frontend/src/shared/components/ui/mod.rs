pub mod button;
pub mod file_input;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use file_input::FileInput;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
