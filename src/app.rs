use crate::command::Command;
use crate::config::EditorConfig;
use crate::element::ImagePayload;
use crate::file_handler::FileHandler;
use crate::id_generator::ObjectId;
use crate::input::{InputHandler, route_event};
use crate::panels::{central_panel, slide_list_panel, tools_panel};
use crate::renderer::Renderer;
use crate::slide::SlideBackground;
use crate::state::{EditorSnapshot, EditorStore, StatePersistence};

const CONFIG_KEY: &str = "editor_config";

/// Text being typed into the inline editor before it is committed
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TextEditSession {
    pub object_id: ObjectId,
    pub buffer: String,
    pub request_focus: bool,
}

impl TextEditSession {
    pub fn new(object_id: ObjectId, content: &str) -> Self {
        Self {
            object_id,
            buffer: content.to_owned(),
            request_focus: true,
        }
    }
}

/// What a picked image file is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageTarget {
    Object,
    Background,
}

impl ImageTarget {
    pub fn title(self) -> &'static str {
        match self {
            ImageTarget::Object => "Insert image",
            ImageTarget::Background => "Background image",
        }
    }

    pub fn command(self, payload: ImagePayload) -> Command {
        match self {
            ImageTarget::Object => Command::AddImageObject(payload),
            ImageTarget::Background => {
                Command::ChangeSlideBackground(SlideBackground::Image(payload.src))
            }
        }
    }
}

pub struct SlideEditorApp {
    pub(crate) store: EditorStore,
    pub(crate) input: InputHandler,
    pub(crate) renderer: Renderer,
    pub(crate) file_handler: FileHandler,
    pub(crate) persistence: StatePersistence,
    pub(crate) text_edit: Option<TextEditSession>,
    pub(crate) title_buffer: String,
    pub(crate) image_path: String,
    pub(crate) image_modal: Option<ImageTarget>,
    pub(crate) status: Option<String>,
}

impl Default for SlideEditorApp {
    fn default() -> Self {
        Self::with_store(EditorStore::default())
    }
}

impl SlideEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let Some(storage) = cc.storage else {
            return Self::default();
        };

        let config: EditorConfig = eframe::get_value(storage, CONFIG_KEY).unwrap_or_default();
        let store = match eframe::get_value::<EditorSnapshot>(storage, eframe::APP_KEY) {
            Some(snapshot) => {
                log::info!("Restored presentation from app storage");
                EditorStore::with_editor(snapshot.into_editor(), config)
            }
            None => EditorStore::new(config),
        };
        Self::with_store(store)
    }

    pub fn with_store(store: EditorStore) -> Self {
        let persistence = StatePersistence::new(&store.config().state_dir);
        let title_buffer = store.editor().presentation.title.clone();
        Self {
            store,
            input: InputHandler::new(),
            renderer: Renderer::new(),
            file_handler: FileHandler::new(),
            persistence,
            text_edit: None,
            title_buffer,
            image_path: String::new(),
            image_modal: None,
            status: None,
        }
    }

    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    /// Apply a command, surfacing any rejection in the status bar
    pub fn dispatch(&mut self, command: Command) -> bool {
        match self.store.dispatch(command) {
            Ok(changed) => changed,
            Err(err) => {
                self.status = Some(err.to_string());
                false
            }
        }
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        for payload in self.file_handler.take_image_payloads() {
            self.dispatch(Command::AddImageObject(payload));
        }
    }

    fn handle_pointer_input(&mut self, ctx: &egui::Context) {
        let events = self
            .input
            .process_input(ctx, self.store.editor(), self.store.config());

        // Each event is routed against the editor its predecessors produced
        for event in events {
            for command in route_event(self.store.editor(), &event) {
                self.dispatch(command);
            }
        }
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let editor = self.store.editor();
                ui.label(format!("{} slides", editor.presentation.slides.len()));
                ui.separator();
                ui.label(format!("{:?}", editor.interaction_mode()));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
    }
}

impl eframe::App for SlideEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.store.snapshot());
        eframe::set_value(storage, CONFIG_KEY, self.store.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.input.begin_frame();
        self.renderer.begin_frame();

        // Panels record their layout for hit testing while they draw
        tools_panel(self, ctx);
        self.status_bar(ctx);
        slide_list_panel(self, ctx);
        central_panel(self, ctx);

        self.handle_pointer_input(ctx);
        self.handle_dropped_files(ctx);

        if self.store.editor().is_dragging() || self.store.editor().is_resizing() {
            ctx.request_repaint();
        }
    }
}
