use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::MapView;
use crate::{api::PositioningAPI, entities::Position};

impl MapView {
    /// Starts the one-shot location request in the background.
    pub fn mount(self: &Arc<Self>) {
        let view = Arc::clone(self);

        tokio::spawn(async move {
            view.acquire_location().await;
        });
    }

    /// Asks the positioning service for the current position exactly
    /// once per view. Returns whether this call issued the request.
    #[tracing::instrument(name = "MapView::acquire_location", skip(self))]
    pub async fn acquire_location(&self) -> bool {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return false;
        }

        match self.services.current_position().await {
            Ok(position) => self.apply_position(position).await,
            Err(err) => {
                tracing::debug!("location unavailable, keeping default center: {}", err);
            }
        }

        true
    }

    async fn apply_position(&self, position: Position) {
        tracing::info!(
            "current position {:?} (accuracy {} m)",
            position.coordinates,
            position.accuracy
        );

        let mut state = self.state.lock().await;
        state.center = position.coordinates;
        state.last_known = Some(position);
    }
}
