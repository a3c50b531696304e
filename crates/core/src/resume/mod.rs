mod requests;
mod types;

pub use requests::CreateResume;
pub use types::Resume;
