use super::MapView;

use async_trait::async_trait;

use crate::{
    api::{MapSurface, SurfaceAPI},
    entities::{RouteOverlay, ViewSnapshot, DEFAULT_ZOOM},
};

#[async_trait]
impl SurfaceAPI for MapView {
    async fn snapshot(&self) -> ViewSnapshot {
        let state = self.state.lock().await;

        ViewSnapshot {
            phase: self.phase(),
            center: state.center,
            zoom: DEFAULT_ZOOM,
            disable_default_ui: true,
            marker: state.marker,
            origin: state.origin.clone(),
            destination: state.destination.clone(),
            route: state.route.as_ref().map(RouteOverlay::from),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn on_map_load(&self, handle: Box<dyn MapSurface>) {
        let mut state = self.state.lock().await;

        handle.place_marker(state.center);
        state.marker = Some(state.center);
        state.map = Some(handle);

        tracing::info!("map surface loaded at {:?}", state.center);
    }

    #[tracing::instrument(skip(self))]
    async fn recenter(&self) -> bool {
        let state = self.state.lock().await;

        match state.map.as_ref() {
            Some(map) => {
                map.pan_to(state.center);
                true
            }
            None => false,
        }
    }
}
