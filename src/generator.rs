use crate::completion::{CompletionError, CompletionService};
use crate::models::{GenerationRequest, GenerationResult};
use crate::prompt::build_pet_name_prompt;

/// Builds the pet name prompt for `request` and asks `service` to complete it.
pub async fn generate_pet_name(
    service: &dyn CompletionService,
    request: &GenerationRequest,
) -> Result<GenerationResult, CompletionError> {
    let prompt = build_pet_name_prompt(&request.animal_type, &request.pet_color);

    let pet_name_suggestions = service.complete(&prompt).await?;
    Ok(GenerationResult { pet_name_suggestions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct Recording {
        prompts: Mutex<Vec<String>>,
        reply: &'static str,
    }

    #[async_trait]
    impl CompletionService for Recording {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl CompletionService for Failing {
        async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::Api { status: 429, body: "quota exceeded".into() })
        }
    }

    #[tokio::test]
    async fn sends_one_templated_prompt_and_wraps_reply() {
        let service = Recording { prompts: Mutex::new(Vec::new()), reply: "Ruby, Cinder, Ember, Blaze, Poppy" };
        let result = generate_pet_name(&service, &GenerationRequest::new("cat", "red")).await.unwrap();

        assert_eq!(result.pet_name_suggestions, "Ruby, Cinder, Ember, Blaze, Poppy");
        assert_eq!(
            *service.prompts.lock().unwrap(),
            vec!["I have a cat pet and I want a cool name for it, it is red in color. Suggest me five cool names for my pet.".to_string()]
        );
    }

    #[tokio::test]
    async fn completion_failure_propagates() {
        let err = generate_pet_name(&Failing, &GenerationRequest::new("Dog", "black")).await.unwrap_err();
        assert!(matches!(err, CompletionError::Api { status: 429, .. }));
    }
}
