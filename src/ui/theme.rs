use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_PAGE: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_PANEL: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_HEADER: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_ROW_ODD: Color32 = Color32::from_rgb(250, 250, 252);
pub const BG_FIELD: Color32 = Color32::from_rgb(255, 255, 255);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(229, 231, 235);
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(14, 165, 233);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(55, 65, 81);
pub const TEXT_DIM: Color32 = Color32::from_rgb(107, 114, 128);
pub const TEXT_ON_BAR: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(220, 38, 38);

pub const ACCENT: Color32 = Color32::from_rgb(14, 165, 233);
pub const TODAY_LINE: Color32 = Color32::from_rgb(239, 68, 68);
pub const GRID_LINE: Color32 = Color32::from_rgb(229, 231, 235);
pub const HANDLE_COLOR: Color32 = Color32::from_rgb(255, 255, 255);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 30.0;
pub const ROW_GAP: f32 = 4.0;
pub const HEADER_HEIGHT: f32 = 36.0;
pub const BAR_ROUNDING: f32 = 4.0;
pub const BAR_INSET: f32 = 3.0; // vertical inset so bars don't touch row edges
pub const MIN_BAR_WIDTH: f32 = 3.0;
pub const SIDE_PANEL_WIDTH: f32 = 260.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.5)
}

pub fn font_bar() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PAGE;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD; // TextEdit bg
    visuals.faint_bg_color = BG_ROW_ODD;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.window_rounding = Rounding::same(8.0);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
