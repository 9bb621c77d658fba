use crate::classifier_app::core::{
    describe_classification, AcquireError, Event, Outcome, RejectReason, State, SubmittedImage,
    PROMPT,
};
use crate::classifier_app::image_file::{file_name, read_image_file};
use crate::config::Config;
use crate::device_camera::interface::CameraCapability;
use std::sync::Arc;

const MAX_PREVIEW_WIDTH: f32 = 320.0;

struct Preview {
    bytes: Arc<[u8]>,
    texture: Option<egui::TextureHandle>,
}

pub struct Render {
    config: Config,
    camera_capability: CameraCapability,
    preview: Option<Preview>,
}

impl Render {
    pub fn new(config: Config, camera_capability: CameraCapability) -> Self {
        Self {
            config,
            camera_capability,
            preview: None,
        }
    }

    /// Draws the current state and returns whatever the user did during this frame.
    pub fn render(&mut self, ctx: &egui::Context, state: &State) -> Vec<Event> {
        let mut events = Vec::new();
        let idle = !state.is_busy();

        if idle {
            events.extend(self.dropped_files(ctx));
        }

        self.update_preview(ctx, state.image());

        let preview = self.preview.as_ref();
        let camera_available = self.camera_capability.available;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("🍈 Pepaya Maturity Classifier");
                ui.add_space(16.0);

                if camera_available
                    && ui
                        .add_enabled(idle, egui::Button::new("📷 Ambil Foto"))
                        .clicked()
                {
                    events.push(Event::CaptureRequested);
                }

                if ui
                    .add_enabled(idle, egui::Button::new("🖼 Pilih dari Galeri"))
                    .clicked()
                {
                    events.push(Event::PickImageRequested);
                }

                ui.label(egui::RichText::new("atau seret gambar ke jendela ini").small());
                ui.add_space(12.0);

                if let Some(image) = state.image() {
                    render_preview(ui, image, preview);
                    ui.add_space(8.0);

                    let can_classify = matches!(state, State::Ready { .. });
                    if ui
                        .add_enabled(can_classify, egui::Button::new("🔍 Prediksi"))
                        .clicked()
                    {
                        events.push(Event::ClassifyRequested);
                    }
                    ui.add_space(8.0);
                }

                match state {
                    State::Waiting { notice: None } => {
                        ui.label(PROMPT);
                    }
                    State::Waiting {
                        notice: Some(notice),
                    } => {
                        ui.colored_label(error_color(), notice.as_str());
                    }
                    State::Acquiring { .. } | State::Classifying { .. } => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("⏳ Memproses...");
                        });
                    }
                    State::Ready { outcome: None, .. } => {}
                    State::Ready {
                        outcome: Some(Outcome::Classified(classification)),
                        ..
                    } => {
                        ui.colored_label(
                            egui::Color32::from_rgb(40, 167, 69),
                            egui::RichText::new(describe_classification(classification))
                                .strong()
                                .size(18.0),
                        );
                    }
                    State::Ready {
                        outcome: Some(Outcome::Failed(message)),
                        ..
                    } => {
                        ui.colored_label(error_color(), message.as_str());
                    }
                }
            });
        });

        events
    }

    fn dropped_files(&self, ctx: &egui::Context) -> Vec<Event> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        dropped
            .into_iter()
            .map(|file| {
                let name = match &file.path {
                    Some(path) => file_name(path),
                    None => file.name.clone(),
                };

                if !self.config.is_accepted_file_name(&name) {
                    return Event::ImageRejected(AcquireError::Rejected {
                        name,
                        reason: RejectReason::UnsupportedFormat,
                    });
                }

                match (file.bytes, file.path) {
                    (Some(bytes), _) => {
                        Event::ImageSubmitted(SubmittedImage::from_file(&name, bytes.to_vec()))
                    }
                    (None, Some(path)) => match read_image_file(&self.config, &path) {
                        Ok(image) => Event::ImageSubmitted(image),
                        Err(error) => Event::ImageRejected(error),
                    },
                    (None, None) => Event::ImageRejected(AcquireError::Rejected {
                        name,
                        reason: RejectReason::Unreadable("tidak ada data".to_string()),
                    }),
                }
            })
            .collect()
    }

    fn update_preview(&mut self, ctx: &egui::Context, image: Option<&SubmittedImage>) {
        let Some(image) = image else {
            self.preview = None;
            return;
        };

        let unchanged = self
            .preview
            .as_ref()
            .is_some_and(|preview| Arc::ptr_eq(&preview.bytes, &image.bytes));
        if unchanged {
            return;
        }

        let texture = decode_preview(&image.bytes).map(|color_image| {
            ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR)
        });

        self.preview = Some(Preview {
            bytes: image.bytes.clone(),
            texture,
        });
    }
}

fn render_preview(ui: &mut egui::Ui, image: &SubmittedImage, preview: Option<&Preview>) {
    match preview.and_then(|preview| preview.texture.as_ref()) {
        Some(texture) => {
            let size = texture.size_vec2();
            let scale = (MAX_PREVIEW_WIDTH / size.x).min(1.0);
            ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
                texture.id(),
                size * scale,
            )));
        }
        None => {
            ui.label("Pratinjau tidak tersedia");
        }
    }
    ui.label(egui::RichText::new(image.describe()).small());
}

/// Downscaled RGBA copy for display. `None` if the bytes are not a decodable image.
fn decode_preview(bytes: &[u8]) -> Option<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes)
        .ok()?
        .thumbnail(640, 640)
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn error_color() -> egui::Color32 {
    egui::Color32::from_rgb(220, 53, 69)
}
