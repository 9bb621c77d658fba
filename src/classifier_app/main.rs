use crate::classifier_app::core::{init, transition, Effect, Event, State};
use crate::classifier_app::render::Render;
use crate::classifier_app::run_effect::RunEffect;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

pub struct ClassifierApp {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    state: State,
    run_effect: RunEffect,
    render: Render,
    event_receiver: Receiver<Event>,
}

impl ClassifierApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("app");
        let (event_sender, event_receiver) = channel();
        let render = Render::new(config.clone(), device_camera.capability());
        let run_effect = RunEffect::new(
            config.clone(),
            logger.with_namespace("effect"),
            image_classifier,
            device_camera,
            event_sender,
        );
        let (state, effects) = init();

        let app = Self {
            config,
            logger,
            state,
            run_effect,
            render,
            event_receiver,
        };
        app.spawn_effects(effects);
        app
    }

    #[cfg(test)]
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self.logger.info(&format!("event: {:?}", event));

        let state = std::mem::take(&mut self.state);
        let (new_state, effects) = transition(&self.config, state, event);

        let _ = self
            .logger
            .info(&format!("new state: {:?}, effects: {:?}", new_state, effects));

        self.state = new_state;
        self.spawn_effects(effects);
    }

    /// Feeds every finished effect back into the state machine without blocking.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
        }
    }

    #[cfg(test)]
    pub fn dispatch_next(&mut self, timeout: Duration) -> bool {
        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(_) => false,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}

impl eframe::App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        for event in self.render.render(ctx, &self.state) {
            self.dispatch(event);
        }

        if self.state.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
