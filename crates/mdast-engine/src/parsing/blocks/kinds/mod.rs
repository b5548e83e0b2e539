pub mod atx_heading;
pub mod blank_line;
pub mod setext_heading;
pub mod text;
pub mod thematic_break;

pub use atx_heading::AtxHeading;
pub use blank_line::BlankLine;
pub use setext_heading::SetextHeading;
pub use text::TextFallback;
pub use thematic_break::ThematicBreak;
