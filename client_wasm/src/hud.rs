//! DOM overlay for the telemetry readout

use drift_core::hud::CONTROLS_LINE;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const HUD_ID: &str = "hud";
pub const CONTROLS_ID: &str = "controls";

pub struct HudOverlay {
    readout: Option<HtmlElement>,
}

fn find(document: &Document, id: &str) -> Option<HtmlElement> {
    let element = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if element.is_none() {
        log::warn!("No #{} element, HUD text will not be shown", id);
    }
    element
}

impl HudOverlay {
    pub fn new(document: &Document) -> Self {
        if let Some(controls) = find(document, CONTROLS_ID) {
            controls.set_inner_text(CONTROLS_LINE);
        }
        Self {
            readout: find(document, HUD_ID),
        }
    }

    pub fn update(&self, lines: &[String]) {
        if let Some(readout) = &self.readout {
            readout.set_inner_text(&lines.join("\n"));
        }
    }
}
