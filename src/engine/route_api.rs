use super::MapView;

use async_trait::async_trait;

use crate::{
    api::{RouteControlAPI, RoutingAPI},
    entities::{DirectionsRequest, InputField, RouteOutcome, RouteResult},
    error::upstream_error,
};

#[async_trait]
impl RouteControlAPI for MapView {
    #[tracing::instrument(skip(self))]
    async fn calculate_route(&self) -> RouteOutcome {
        // the sequence is issued under the same lock `clear_route` takes
        let (request, sequence) = {
            let state = self.state.lock().await;

            if state.origin.is_empty() || state.destination.is_empty() {
                return RouteOutcome::Skipped;
            }

            let request =
                DirectionsRequest::driving(state.origin.clone(), state.destination.clone());

            (request, self.next_sequence())
        };

        let response = match self.services.route(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("error fetching directions (request {}): {}", sequence, err);
                return RouteOutcome::Failed { sequence };
            }
        };

        if !response.status.is_ok() {
            tracing::error!(
                "error fetching directions (request {}): status {:?}",
                sequence,
                response.status
            );
            return RouteOutcome::Failed { sequence };
        }

        let route = match response
            .result
            .ok_or_else(upstream_error)
            .and_then(RouteResult::from_directions)
        {
            Ok(route) => route,
            Err(err) => {
                tracing::error!("unusable directions (request {}): {}", sequence, err);
                return RouteOutcome::Failed { sequence };
            }
        };

        let mut state = self.state.lock().await;

        if !self.is_latest(sequence) {
            tracing::debug!("discarding stale directions (request {})", sequence);
            return RouteOutcome::Stale { sequence };
        }

        tracing::info!(
            "route {}: {} / {}",
            sequence,
            route.distance_text,
            route.duration_text
        );
        state.route = Some(route);

        RouteOutcome::Applied { sequence }
    }

    #[tracing::instrument(skip(self))]
    async fn clear_route(&self) {
        let mut state = self.state.lock().await;

        // responses to anything issued before the clear are stale now
        self.next_sequence();

        state.route = None;
        state.center = state.home();

        for field in [InputField::Origin, InputField::Destination] {
            state.input_mut(field).clear();
            state.renew_session(field);
        }
    }
}
