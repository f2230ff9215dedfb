pub mod file_set;
pub mod loaders;
pub mod question;
pub mod session;
pub mod upload;

pub use file_set::{AddOutcome, FileSet};
pub use loaders::{load_file, load_folder};
pub use question::{AiMode, Difficulty, QuestionAnswer, NO_ANSWER_PLACEHOLDER};
pub use session::Session;
pub use upload::{
    format_file_size, BatchStatus, FileHandle, FileId, UploadStatus, UploadSummary, UploadableFile,
};
