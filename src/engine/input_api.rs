use super::{MapView, SUGGESTION_RADIUS};

use async_trait::async_trait;

use crate::{
    api::{InputAPI, PlacesAPI},
    entities::{InputField, PlaceSuggestion, PlaceSuggestions},
};

#[async_trait]
impl InputAPI for MapView {
    #[tracing::instrument(skip(self))]
    async fn set_input(&self, field: InputField, text: String) {
        let mut state = self.state.lock().await;
        *state.input_mut(field) = text;
    }

    #[tracing::instrument(skip(self))]
    async fn place_suggestions(&self, field: InputField, input: String) -> PlaceSuggestions {
        if input.is_empty() {
            return vec![];
        }

        let (center, session) = {
            let state = self.state.lock().await;
            (state.center, state.session(field))
        };

        match self
            .services
            .find_place_suggestions(input, center, SUGGESTION_RADIUS, session.to_string())
            .await
        {
            Ok(suggestions) => suggestions,
            Err(err) => {
                tracing::warn!("autocomplete failed for {:?}: {}", field, err);
                vec![]
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn select_place(&self, field: InputField, suggestion: PlaceSuggestion) {
        tracing::info!("place changed: {:?} -> {}", field, suggestion.place_id);

        let mut state = self.state.lock().await;
        *state.input_mut(field) = suggestion.description;
        state.renew_session(field);

        tracing::debug!("{:?} is now {:?}", field, state.input(field));
    }
}
