use egui::{Color32, Context, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use egui_wgpu::Renderer;
use egui_winit::State;
use photoelectric_physics::{
    explanation, EjectionStyle, InputError, Metal, ResultDisplay, SimulationResult,
    FREQUENCY_UNIT_HZ,
};
use photoelectric_simulation::{AnimationParams, SimulationSession};
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

/// Slider range for the frequency, in 10¹⁴ Hz
const FREQUENCY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=15.0;
const INTENSITY_RANGE: std::ops::RangeInclusive<f64> = 1.0..=200.0;

const ENERGY_LINE_COLOR: Color32 = Color32::from_rgb(0x00, 0xbc, 0xd4);
const KINETIC_LINE_COLOR: Color32 = Color32::from_rgb(0x18, 0xff, 0xff);

/// Slider and text box showing the same number
pub struct LinkedValue {
    pub value: f64,
    pub text: String,
}

impl LinkedValue {
    fn new(value: f64) -> Self {
        Self {
            value,
            text: format_value(value),
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, label: &str, range: std::ops::RangeInclusive<f64>) {
        ui.label(label);
        ui.horizontal(|ui| {
            if ui
                .add(egui::Slider::new(&mut self.value, range).show_value(false))
                .changed()
            {
                self.text = format_value(self.value);
            }

            let response = ui.add(egui::TextEdit::singleline(&mut self.text).desired_width(60.0));
            if response.changed() {
                // The text is what gets submitted; the slider follows when it can
                if let Ok(value) = self.text.trim().parse::<f64>() {
                    if value.is_finite() {
                        self.value = value;
                    }
                }
            }
        });
    }
}

fn format_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded}")
}

pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,

    pub frequency: LinkedValue,
    pub intensity: LinkedValue,
    pub metal: Option<Metal>,

    /// Set when the user asks for a new simulation
    pub simulate_requested: bool,
    /// Set when the metal selector changed
    pub metal_changed: bool,
    /// Shown in a blocking notice until dismissed
    pub error: Option<InputError>,

    pub display: Option<ResultDisplay>,
    pub explanation: Option<String>,

    pub animation_params: AnimationParams,
    pub show_trails: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: 0.0,
            frequency: LinkedValue::new(10.0),
            intensity: LinkedValue::new(50.0),
            metal: Some(Metal::Cesium),
            simulate_requested: false,
            metal_changed: true,
            error: None,
            display: None,
            explanation: None,
            animation_params: AnimationParams::default(),
            show_trails: true,
        }
    }
}

impl UiState {
    /// Metal identifier as the simulate action sees it; empty when nothing is selected
    pub fn metal_id(&self) -> &'static str {
        self.metal.map(Metal::id).unwrap_or("")
    }

    pub fn show_result(&mut self, result: &SimulationResult) {
        self.display = Some(ResultDisplay::from(result));
        self.explanation = Some(explanation(result));
    }
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &mut UiState,
        session: &SimulationSession,
    ) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            Self::ui(ctx, ui_state, session);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let callback_buffers = self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );
        if !callback_buffers.is_empty() {
            queue.submit(callback_buffers);
        }

        let mut render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        self.renderer
            .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        drop(render_pass);

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    fn ui(ctx: &Context, state: &mut UiState, session: &SimulationSession) {
        Self::controls_panel(ctx, state);
        Self::results_panel(ctx, state);
        Self::charts_panel(ctx, session);
        Self::statistics_panel(ctx, state, session);
        Self::error_notice(ctx, state);
    }

    fn controls_panel(ctx: &Context, state: &mut UiState) {
        egui::Window::new("Controls")
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                state
                    .frequency
                    .show(ui, "Frequency (×10¹⁴ Hz)", FREQUENCY_RANGE);
                state.intensity.show(ui, "Intensity", INTENSITY_RANGE);

                ui.label("Metal");
                let selected = state.metal.map(Metal::label);
                egui::ComboBox::from_id_salt("metal_select")
                    .selected_text(selected.as_deref().unwrap_or("Select a metal"))
                    .show_ui(ui, |ui| {
                        for metal in Metal::ALL {
                            if ui
                                .selectable_value(&mut state.metal, Some(metal), metal.label())
                                .changed()
                            {
                                state.metal_changed = true;
                            }
                        }
                        ui.selectable_value(&mut state.metal, None, "Select a metal");
                    });

                ui.add_space(6.0);
                if ui.button("Simulate").clicked() {
                    state.simulate_requested = true;
                }

                ui.separator();
                ui.collapsing("Animation", |ui| {
                    let params = &mut state.animation_params;
                    ui.add(
                        egui::Slider::new(&mut params.wave_amplitude, 0.0..=0.2)
                            .text("Wave Amplitude"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.wave_frequency, 0.0..=20.0)
                            .text("Wave Frequency"),
                    );
                    ui.add(egui::Slider::new(&mut params.spin.x, 0.0..=0.2).text("Spin X"));
                    ui.add(egui::Slider::new(&mut params.spin.y, 0.0..=0.2).text("Spin Y"));
                    ui.add(egui::Slider::new(&mut params.gravity, 0.0..=0.05).text("Gravity"));
                    ui.add(
                        egui::Slider::new(&mut params.electron_speed, 0.05..=1.0)
                            .text("Electron Speed"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.spawn_stagger, 0.0..=1.0)
                            .text("Photon Spacing (s)"),
                    );
                    ui.checkbox(&mut state.show_trails, "Show Trails");
                    if ui.button("Reset").clicked() {
                        *params = AnimationParams::default();
                    }
                });
            });

        // Enter submits too, unless the error notice is up
        if state.error.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            state.simulate_requested = true;
        }
    }

    fn results_panel(ctx: &Context, state: &UiState) {
        egui::Window::new("Results")
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                let Some(display) = &state.display else {
                    ui.label("Press Simulate to fire photons at the surface.");
                    return;
                };

                egui::Grid::new("results_grid")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        let rows = [
                            ("Photon Energy", &display.photon_energy),
                            ("Work Function", &display.work_function),
                            ("Threshold Frequency", &display.threshold_frequency),
                            ("Wavelength", &display.wavelength),
                            ("Spectrum", &display.spectrum),
                            ("Kinetic Energy", &display.kinetic_energy),
                        ];
                        for (label, value) in rows {
                            ui.label(label);
                            ui.label(RichText::new(value.as_str()).strong());
                            ui.end_row();
                        }

                        let color = match display.ejection_style {
                            EjectionStyle::Highlight => Color32::LIGHT_GREEN,
                            EjectionStyle::Error => Color32::LIGHT_RED,
                        };
                        ui.label("Electron Ejected");
                        ui.label(RichText::new(display.electron_ejected).strong().color(color));
                        ui.end_row();
                    });

                if let Some(text) = &state.explanation {
                    ui.separator();
                    ui.set_max_width(320.0);
                    ui.label(text.as_str());
                }
            });
    }

    fn charts_panel(ctx: &Context, session: &SimulationSession) {
        egui::Window::new("Charts")
            .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
            .default_width(360.0)
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                Plot::new("energy_frequency_plot")
                    .height(150.0)
                    .width(340.0)
                    .x_axis_label("Frequency (×10¹⁴ Hz)")
                    .y_axis_label("Energy (eV)")
                    .legend(Legend::default())
                    .allow_drag(false)
                    .allow_zoom(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(
                            Line::new(
                                "Photon Energy (eV)",
                                PlotPoints::from(session.energy_curve().to_vec()),
                            )
                            .color(ENERGY_LINE_COLOR),
                        );
                    });

                ui.add_space(8.0);

                Plot::new("kinetic_energy_plot")
                    .height(150.0)
                    .width(340.0)
                    .x_axis_label("Frequency (×10¹⁴ Hz)")
                    .y_axis_label("Kinetic Energy (eV)")
                    .legend(Legend::default())
                    .allow_drag(false)
                    .allow_zoom(false)
                    .show(ui, |plot_ui| {
                        if let Some(series) = session.kinetic_series() {
                            plot_ui.line(
                                Line::new(series.metal.label(), PlotPoints::from(series.points.clone()))
                                    .color(KINETIC_LINE_COLOR),
                            );
                        }

                        if let Some(result) = session.result() {
                            let marker = [
                                result.frequency_hz / FREQUENCY_UNIT_HZ,
                                result.kinetic_energy_ev,
                            ];
                            plot_ui.points(
                                Points::new("Current", vec![marker])
                                    .radius(4.0)
                                    .color(Color32::WHITE),
                            );
                        }
                    });
            });
    }

    fn statistics_panel(ctx: &Context, state: &UiState, session: &SimulationSession) {
        egui::Window::new("Statistics")
            .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                ui.label(format!("FPS: {:.1}", state.fps));
                ui.label(format!("Frame Time: {:.2} ms", state.frame_time));
                ui.separator();

                let animator = session.animator();
                let stats = session.stats();
                ui.heading("Live");
                ui.label(format!("Photons: {}", animator.photons().len()));
                ui.label(format!("Electrons: {}", animator.electrons().len()));
                ui.label(format!("Queued: {}", animator.pending_spawns()));
                ui.separator();
                ui.heading("Totals");
                ui.label(format!("Simulations: {}", stats.simulations));
                ui.label(format!("Photons Emitted: {}", stats.photons_emitted));
                ui.label(format!("Photons Absorbed: {}", stats.photons_absorbed));
                ui.label(format!("Electrons Ejected: {}", stats.electrons_ejected));
                if stats.photons_skipped > 0 {
                    ui.label(format!("Photons Skipped: {}", stats.photons_skipped));
                }
            });
    }

    fn error_notice(ctx: &Context, state: &mut UiState) {
        let Some(error) = &state.error else {
            return;
        };
        let message = error.to_string();

        let mut dismissed = false;
        let response = egui::Modal::new(egui::Id::new("input_error")).show(ctx, |ui| {
            ui.heading("Invalid input");
            ui.label(message.as_str());
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        if dismissed || response.should_close() {
            state.error = None;
        }
    }
}
