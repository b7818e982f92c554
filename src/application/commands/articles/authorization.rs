// src/application/commands/articles/authorization.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{CanEditContentSpec, ContentEnvelope},
        user::UserRepository,
    },
};

pub(super) async fn ensure_can_edit(
    users: &dyn UserRepository,
    envelope: &ContentEnvelope,
    actor: &AuthenticatedUser,
) -> ApplicationResult<()> {
    let author = users.find_by_id(envelope.author_id).await?;

    if CanEditContentSpec::new(envelope, author.as_ref(), &actor.username).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only the author may edit this article",
        ))
    }
}
