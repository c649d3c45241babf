pub mod coach;
pub mod gemini;
pub mod persona;
