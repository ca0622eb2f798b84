pub mod classifier;
pub mod codec;
pub mod handler;
pub mod scorer;
pub mod selector;

pub use crate::domain::model::{ClassifiedRequest, DecodeCandidate, Detection, Reply, ReplyOption};
pub use crate::domain::ports::{ConfigProvider, ReplySink};
pub use crate::utils::error::Result;
