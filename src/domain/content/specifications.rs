use crate::domain::content::entity::ContentEnvelope;
use crate::domain::user::User;

/// Only the recorded author may change a content item. `author` is the
/// directory entry resolved from `envelope.author_id`; when the author can no
/// longer be resolved nobody may edit.
pub struct CanEditContentSpec<'a> {
    envelope: &'a ContentEnvelope,
    author: Option<&'a User>,
    acting_username: &'a str,
}

impl<'a> CanEditContentSpec<'a> {
    pub fn new(
        envelope: &'a ContentEnvelope,
        author: Option<&'a User>,
        acting_username: &'a str,
    ) -> Self {
        Self {
            envelope,
            author,
            acting_username,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.author.is_some_and(|author| {
            author.id == self.envelope.author_id
                && author.username.as_str() == self.acting_username
        })
    }
}
