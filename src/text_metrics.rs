//! Font-backed text width measurement. Falls back to a flat per-character
//! estimate when no matching face is installed, so layout stays
//! deterministic on headless machines.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use ttf_parser::Face;

static MEASURER: Lazy<Mutex<Measurer>> = Lazy::new(|| Mutex::new(Measurer::default()));

pub fn text_width(text: &str, font_size: f32, font_family: &str) -> f32 {
    if text.is_empty() || font_size <= 0.0 {
        return 0.0;
    }
    MEASURER
        .lock()
        .ok()
        .and_then(|mut m| m.measure(text, font_size, font_family))
        .unwrap_or_else(|| fallback_width(text, font_size))
}

/// Flat estimate calibrated against common sans-serif faces.
pub fn fallback_width(text: &str, font_size: f32) -> f32 {
    let count = text.chars().filter(|ch| *ch != '\n').count();
    count as f32 * font_size * 0.56
}

#[derive(Default)]
struct Measurer {
    db: Option<Database>,
    faces: HashMap<String, Option<OwnedFace>>,
}

struct OwnedFace {
    data: Vec<u8>,
    index: u32,
    units_per_em: u16,
}

impl Measurer {
    fn measure(&mut self, text: &str, font_size: f32, font_family: &str) -> Option<f32> {
        let key = font_family.trim().to_string();
        if !self.faces.contains_key(&key) {
            let face = self.load(font_family);
            self.faces.insert(key.clone(), face);
        }
        self.faces.get(&key)?.as_ref()?.width(text, font_size)
    }

    fn load(&mut self, font_family: &str) -> Option<OwnedFace> {
        let db = self.db.get_or_insert_with(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            db
        });

        let parts: Vec<&str> = font_family
            .split(',')
            .map(|part| part.trim().trim_matches('"').trim_matches('\''))
            .filter(|part| !part.is_empty())
            .collect();
        let mut families: Vec<Family<'_>> = Vec::with_capacity(parts.len().max(1));
        for &part in &parts {
            match part.to_ascii_lowercase().as_str() {
                "serif" => families.push(Family::Serif),
                "sans-serif" | "system-ui" | "-apple-system" | "ui-sans-serif" => {
                    families.push(Family::SansSerif)
                }
                "monospace" | "ui-monospace" => families.push(Family::Monospace),
                "cursive" => families.push(Family::Cursive),
                "fantasy" => families.push(Family::Fantasy),
                _ => families.push(Family::Name(part)),
            }
        }
        if families.is_empty() {
            families.push(Family::SansSerif);
        }

        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = db.query(&query)?;
        let mut loaded = None;
        db.with_face_data(id, |data, index| {
            if let Ok(face) = Face::parse(data, index) {
                loaded = Some(OwnedFace {
                    data: data.to_vec(),
                    index,
                    units_per_em: face.units_per_em().max(1),
                });
            }
        });
        loaded
    }
}

impl OwnedFace {
    fn width(&self, text: &str, font_size: f32) -> Option<f32> {
        let face = Face::parse(&self.data, self.index).ok()?;
        let scale = font_size / self.units_per_em as f32;
        let fallback = font_size * 0.56;
        let mut width = 0.0f32;
        for ch in text.chars() {
            if ch == '\n' {
                continue;
            }
            match face
                .glyph_index(ch)
                .and_then(|glyph| face.glyph_hor_advance(glyph))
            {
                Some(advance) => width += advance as f32 * scale,
                None => width += fallback,
            }
        }
        Some(width.max(0.0))
    }
}
