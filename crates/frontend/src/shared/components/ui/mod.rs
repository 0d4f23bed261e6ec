pub mod button;
pub mod checkbox;
pub mod file_input;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use checkbox::Checkbox;
pub use file_input::FileInput;
pub use select::Select;
pub use textarea::Textarea;
