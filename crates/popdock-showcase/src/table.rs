//! The estimates table: one row per (scheme, attack), one column per cost
//! model, with identity columns up front. The header spans two rows like
//! the published page: a group banner over the cost-model columns, then
//! the model names. Cost cells are the interactive part; everything else
//! is presentation.

use popdock_core::Rect;
use popdock_widgets::{Cell, Color, Style, Surface, Widget};
use unicode_width::UnicodeWidthChar;

use crate::dataset::{AttackEstimate, MODELS};

/// Fixed widths of the identity columns.
const SCHEME_W: u16 = 16;
const ASSUMPTION_W: u16 = 11;
const PRIMITIVE_W: u16 = 10;
const ATTACK_W: u16 = 8;
const CLAIMED_W: u16 = 9;
const CATEGORY_W: u16 = 5;
/// Width of each cost-model column.
const MODEL_W: u16 = 18;

/// Row index of the first data row inside the table area: group banner,
/// model names, underline.
const FIRST_DATA_ROW: u16 = 3;

/// A cost cell address: data row and model column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub model: usize,
}

/// X offset of cost-model column `idx` within the table area.
fn model_column_x(idx: usize) -> u16 {
    SCHEME_W + ASSUMPTION_W + PRIMITIVE_W + ATTACK_W + CLAIMED_W + CATEGORY_W
        + idx as u16 * MODEL_W
}

/// Map a point to the cost cell under it, if any.
pub fn cost_cell_at(area: Rect, x: u16, y: u16, row_count: usize) -> Option<CellRef> {
    if !area.contains(x, y) || y < area.y + FIRST_DATA_ROW {
        return None;
    }
    let row = (y - area.y - FIRST_DATA_ROW) as usize;
    if row >= row_count {
        return None;
    }
    let rel_x = x - area.x;
    let first_model_x = model_column_x(0);
    if rel_x < first_model_x {
        return None;
    }
    let model = ((rel_x - first_model_x) / MODEL_W) as usize;
    (model < MODELS.len()).then_some(CellRef { row, model })
}

/// Screen position of a cost cell's left edge, for placing dialogs opened
/// via keyboard.
pub fn cost_cell_origin(area: Rect, cell: CellRef) -> (u16, u16) {
    (
        area.x + model_column_x(cell.model),
        area.y + FIRST_DATA_ROW + cell.row as u16,
    )
}

pub(crate) fn put_text(
    surface: &mut Surface,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) {
    let mut cursor = x;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0).max(1) as u16;
        if cursor + w > max_x {
            break;
        }
        surface.set(cursor, y, Cell::styled(ch, style));
        cursor += w;
    }
}

/// The estimates table widget.
pub struct EstimatesTable<'a> {
    rows: &'a [AttackEstimate],
    selected: Option<CellRef>,
}

impl<'a> EstimatesTable<'a> {
    pub fn new(rows: &'a [AttackEstimate]) -> Self {
        Self {
            rows,
            selected: None,
        }
    }

    /// Highlight one cost cell.
    pub fn selected(mut self, cell: Option<CellRef>) -> Self {
        self.selected = cell;
        self
    }
}

impl Widget for EstimatesTable<'_> {
    fn render(&self, area: Rect, surface: &mut Surface) {
        if area.is_empty() {
            return;
        }
        let max_x = area.right();
        let header = Style::new().bold().fg(Color::rgb(215, 215, 215));

        let identity: [(&str, u16); 6] = [
            ("Scheme", 0),
            ("Assumption", SCHEME_W),
            ("Primitive", SCHEME_W + ASSUMPTION_W),
            ("Attack", SCHEME_W + ASSUMPTION_W + PRIMITIVE_W),
            ("Claimed", SCHEME_W + ASSUMPTION_W + PRIMITIVE_W + ATTACK_W),
            (
                "Cat",
                SCHEME_W + ASSUMPTION_W + PRIMITIVE_W + ATTACK_W + CLAIMED_W,
            ),
        ];
        for (name, offset) in identity {
            put_text(surface, area.x + offset, area.y, name, header, max_x);
        }
        put_text(
            surface,
            area.x + model_column_x(0),
            area.y,
            "Proposed BKZ cost models",
            header,
            max_x,
        );
        for (j, model) in MODELS.iter().enumerate() {
            put_text(
                surface,
                area.x + model_column_x(j),
                area.y + 1,
                model.name,
                header,
                max_x,
            );
        }
        for x in area.x..max_x {
            surface.set(x, area.y + 2, Cell::from_char('─'));
        }

        for (i, est) in self.rows.iter().enumerate() {
            let y = area.y + FIRST_DATA_ROW + i as u16;
            if y >= area.bottom() {
                break;
            }
            let category = est.params[0]
                .category
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let claimed = est.claimed().to_string();

            put_text(surface, area.x, y, est.scheme.name, Style::new(), max_x);
            let cells: [(&str, u16, Style); 5] = [
                (est.scheme.assumption, SCHEME_W, Style::new().dim()),
                (
                    est.scheme.primitive,
                    SCHEME_W + ASSUMPTION_W,
                    Style::new().dim(),
                ),
                (
                    est.attack.label(),
                    SCHEME_W + ASSUMPTION_W + PRIMITIVE_W,
                    Style::new(),
                ),
                (
                    &claimed,
                    SCHEME_W + ASSUMPTION_W + PRIMITIVE_W + ATTACK_W,
                    Style::new(),
                ),
                (
                    &category,
                    SCHEME_W + ASSUMPTION_W + PRIMITIVE_W + ATTACK_W + CLAIMED_W,
                    Style::new().dim(),
                ),
            ];
            for (text, offset, style) in cells {
                put_text(surface, area.x + offset, y, text, style, max_x);
            }

            for (j, model) in MODELS.iter().enumerate() {
                let x = area.x + model_column_x(j);
                let style = if self.selected == Some(CellRef { row: i, model: j }) {
                    Style::new().reverse()
                } else {
                    Style::new()
                };
                match est.cost_for(model.name) {
                    Some(cost) => {
                        put_text(surface, x, y, &format!("{:.1}", cost.rop), style, max_x);
                    }
                    None => put_text(surface, x, y, "—", Style::new().dim(), max_x),
                }
            }
        }
    }
}
