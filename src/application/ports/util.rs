// src/application/ports/util.rs
use crate::domain::content::ContentId;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ContentId;
}
