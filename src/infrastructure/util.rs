use crate::application::ports::util::IdGenerator;
use crate::domain::content::ContentId;

#[derive(Default, Clone)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ContentId {
        ContentId::random()
    }
}
