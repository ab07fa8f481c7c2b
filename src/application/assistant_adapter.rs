//! AssistantSessionAdapter - forwards prompts to the assistant and keeps
//! the session's conversation in step.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::conversation::Message;
use crate::domain::session::{SessionContext, WorkflowError};
use crate::ports::AssistantConnector;

/// Reply returned when no usable credential is supplied.
pub const ASSISTANT_FALLBACK: &str =
    "Désolé, ELVIA n'est pas configurée. Veuillez vérifier votre clé API.";

/// Key value shipped in sample configuration; treated as absent.
pub const PLACEHOLDER_API_KEY: &str = "VOTRE_CLE_MISTRAL_ICI";

/// What `ask` produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub reply: String,
    /// True when the fallback text was returned instead of calling out.
    pub fallback: bool,
}

/// Session-side half of the assistant conversation.
pub struct AssistantSessionAdapter {
    connector: Arc<dyn AssistantConnector>,
}

impl AssistantSessionAdapter {
    pub fn new(connector: Arc<dyn AssistantConnector>) -> Self {
        Self { connector }
    }

    /// Asks the assistant and records the exchange.
    ///
    /// The conversation only grows when the assistant answers: the fallback
    /// path and every failure leave it untouched.
    ///
    /// # Errors
    ///
    /// - `NotSignedIn` before login
    /// - `Validation` for a blank prompt
    /// - `Assistant` if connecting or the call itself fails
    pub async fn ask(
        &self,
        ctx: &mut SessionContext,
        prompt: &str,
        credential: Option<&Secret<String>>,
    ) -> Result<AssistantReply, WorkflowError> {
        let user_name = ctx.require_identity()?.display_name().to_string();
        let question = Message::user(prompt)?;

        let Some(credential) = credential.filter(|c| is_usable(c)) else {
            tracing::debug!(session_id = %ctx.id(), "Assistant not configured, returning fallback");
            return Ok(AssistantReply {
                reply: ASSISTANT_FALLBACK.to_string(),
                fallback: true,
            });
        };

        let assistant = self
            .connector
            .connect(credential, &user_name)
            .map_err(|err| WorkflowError::Assistant(err.to_string()))?;

        tracing::debug!(
            session_id = %ctx.id(),
            history_len = ctx.conversation().len(),
            "Forwarding prompt to assistant"
        );

        let reply = assistant
            .ask(question.content(), ctx.conversation().messages())
            .await
            .map_err(|err| {
                tracing::error!(session_id = %ctx.id(), "Assistant call failed: {}", err);
                WorkflowError::Assistant(err.to_string())
            })?;

        ctx.record_exchange(question, Message::assistant(reply.clone()))?;

        Ok(AssistantReply {
            reply,
            fallback: false,
        })
    }
}

fn is_usable(credential: &Secret<String>) -> bool {
    let key = credential.expose_secret().trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}
