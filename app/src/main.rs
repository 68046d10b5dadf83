use std::collections::HashMap;
use std::path::PathBuf;

use atlas::{ATLAS_SIZE, AtlasSelection, build_atlas, discover_tiles, process_tile};
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle, Vec2};

struct AtlasApp {
    // packing state, pure and widget-free; the UI only issues operations
    selection: AtlasSelection,
    folder: Option<PathBuf>,

    // processed 16×16 tile previews, keyed by source path
    thumbnails: HashMap<PathBuf, TextureHandle>,

    // composed atlas preview, rebuilt when the selection changes
    preview_texture: Option<TextureHandle>,
    preview_dirty: bool,

    picked_available: Option<PathBuf>,
    picked_selected: Option<usize>,

    status_message: String,
}

impl Default for AtlasApp {
    fn default() -> Self {
        Self {
            selection: AtlasSelection::default(),
            folder: None,
            thumbnails: HashMap::new(),
            preview_texture: None,
            preview_dirty: false,
            picked_available: None,
            picked_selected: None,
            status_message: "Open a tile folder to start".into(),
        }
    }
}

impl AtlasApp {
    fn open_folder(&mut self, ctx: &egui::Context, dir: PathBuf) {
        match discover_tiles(&dir) {
            Ok(tiles) => {
                self.thumbnails.clear();
                // cache processed thumbnails so the lists show what will
                // actually land in the atlas
                for path in &tiles {
                    if let Ok(tile) = process_tile(path) {
                        let img = ColorImage::from_rgb(
                            [tile.width() as usize, tile.height() as usize],
                            tile.as_raw(),
                        );
                        let name = path.display().to_string();
                        self.thumbnails.insert(
                            path.clone(),
                            ctx.load_texture(name, img, egui::TextureOptions::NEAREST),
                        );
                    }
                }
                self.status_message = format!("Found {} tiles in {}", tiles.len(), dir.display());
                self.selection = AtlasSelection::new(tiles);
                self.folder = Some(dir);
                self.picked_available = None;
                self.picked_selected = None;
                self.preview_dirty = true;
            }
            Err(err) => {
                self.status_message = format!("Error: {}", err);
            }
        }
    }

    fn rebuild_preview(&mut self, ctx: &egui::Context) {
        let atlas_img = build_atlas(self.selection.selected());
        let color_image = ColorImage::from_rgb(
            [ATLAS_SIZE as usize, ATLAS_SIZE as usize],
            atlas_img.as_raw(),
        );
        self.preview_texture =
            Some(ctx.load_texture("atlas_preview", color_image, egui::TextureOptions::NEAREST));
        self.preview_dirty = false;
    }

    fn file_label(path: &std::path::Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

impl App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.preview_dirty {
            self.rebuild_preview(ctx);
        }

        egui::SidePanel::left("controls")
            .min_width(340.0)
            .show(ctx, |ui| {
                ui.heading("Texture Atlas Creator");
                ui.separator();

                if ui.button("Open Tile Folder…").clicked() {
                    if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                        self.open_folder(ctx, dir);
                    }
                }
                if let Some(folder) = &self.folder {
                    ui.label(format!("Folder: {}", folder.display()));
                }
                ui.separator();

                ui.label("Available Tiles");
                egui::ScrollArea::vertical()
                    .id_salt("available")
                    .max_height(220.0)
                    .show(ui, |ui| {
                        let available: Vec<PathBuf> = self.selection.available().to_vec();
                        for path in available {
                            ui.horizontal(|ui| {
                                if let Some(tex) = self.thumbnails.get(&path) {
                                    ui.image((tex.id(), Vec2::splat(20.0)));
                                }
                                let picked = self.picked_available.as_ref() == Some(&path);
                                if ui.selectable_label(picked, Self::file_label(&path)).clicked() {
                                    self.picked_available = Some(path.clone());
                                }
                            });
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Add →").clicked() {
                        if let Some(path) = self.picked_available.take() {
                            if self.selection.add(&path) {
                                self.preview_dirty = true;
                            }
                        }
                    }
                    if ui.button("← Remove").clicked() {
                        if let Some(idx) = self.picked_selected.take() {
                            if self.selection.remove(idx) {
                                self.preview_dirty = true;
                            }
                        }
                    }
                    if ui.button("↑").clicked() {
                        if let Some(idx) = self.picked_selected {
                            if self.selection.move_up(idx) {
                                self.picked_selected = Some(idx - 1);
                                self.preview_dirty = true;
                            }
                        }
                    }
                    if ui.button("↓").clicked() {
                        if let Some(idx) = self.picked_selected {
                            if self.selection.move_down(idx) {
                                self.picked_selected = Some(idx + 1);
                                self.preview_dirty = true;
                            }
                        }
                    }
                    if ui.button("Clear All").clicked() {
                        self.selection.clear();
                        self.picked_selected = None;
                        self.preview_dirty = true;
                    }
                });

                ui.separator();
                ui.label("Selected Tiles (Atlas Order)");
                egui::ScrollArea::vertical()
                    .id_salt("selected")
                    .max_height(220.0)
                    .show(ui, |ui| {
                        let selected: Vec<PathBuf> = self.selection.selected().to_vec();
                        for (i, path) in selected.iter().enumerate() {
                            ui.horizontal(|ui| {
                                if let Some(tex) = self.thumbnails.get(path) {
                                    ui.image((tex.id(), Vec2::splat(20.0)));
                                }
                                let picked = self.picked_selected == Some(i);
                                let label = format!("{:3}: {}", i, Self::file_label(path));
                                if ui.selectable_label(picked, label).clicked() {
                                    self.picked_selected = Some(i);
                                }
                            });
                        }
                    });

                ui.separator();
                if ui.button("Create Atlas").clicked() {
                    let atlas_img = build_atlas(self.selection.selected());
                    match atlas_img.save("texture_atlas.png") {
                        Ok(()) => {
                            self.status_message = format!(
                                "Saved texture_atlas.png ({} tiles, {}x{}px)",
                                self.selection.selected().len(),
                                ATLAS_SIZE,
                                ATLAS_SIZE
                            );
                        }
                        Err(err) => {
                            self.status_message = format!("Save failed: {}", err);
                        }
                    }
                }

                ui.separator();
                ui.label(&self.status_message);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!(
                "Atlas Preview: 16x16 grid ({}x{}px)",
                ATLAS_SIZE, ATLAS_SIZE
            ));
            if let Some(tex) = &self.preview_texture {
                let side = ui.available_size().min_elem().max(256.0);
                ui.image((tex.id(), Vec2::splat(side)));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a folder and add tiles to see the preview");
                });
            }
        });
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    run_native(
        "Texture Atlas Creator",
        opts,
        Box::new(|_cc| Ok(Box::new(AtlasApp::default()))),
    )
    .unwrap();
}
