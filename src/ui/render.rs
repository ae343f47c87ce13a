use std::fmt::Write;

use super::theme::Palette;
use crate::app::{AppState, Catalog, PersonDraft, Summary, View};

/// Draw the screen for the current view.
pub fn render(app: &AppState, p: &Palette) -> String {
    match app.view {
        View::Setup => render_setup(app.session.party_size(), p),
        View::Order => match app.session.current_person() {
            Some(ctx) => render_order(ctx.index, ctx.total, &app.draft, &app.catalog, p),
            None => render_setup(app.session.party_size(), p),
        },
        View::Summary => match &app.summary {
            Some(summary) => render_summary(summary, p),
            None => render_setup(app.session.party_size(), p),
        },
        View::Settings => render_settings(&app.catalog, p),
    }
}

pub fn render_setup(party_size: usize, p: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.title("¿Cuántas personas?"));
    let _ = writeln!(out, "  [-]  {}  [+]", p.accent(&party_size.to_string()));
    let _ = writeln!(
        out,
        "{}",
        p.muted("+ / - / people <n> / start / settings / theme / quit")
    );
    out
}

pub fn render_order(
    index: usize,
    total: usize,
    draft: &PersonDraft,
    catalog: &Catalog,
    p: &Palette,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}",
        p.title(&format!("Persona {}", index)),
        p.muted(&format!("{} / {}", index, total))
    );
    for (i, row) in draft.rows().iter().enumerate() {
        let item = row.item.as_deref().unwrap_or("(none)");
        let dough = row.variant.map(|v| v.as_str()).unwrap_or("(none)");
        let _ = writeln!(
            out,
            "  {}. {} x {} ({})",
            i + 1,
            p.accent(&row.quantity.to_string()),
            item,
            dough
        );
    }
    if catalog.is_empty() {
        let _ = writeln!(out, "{}", p.error("The menu is empty. Add specialties in settings."));
    } else {
        let menu: Vec<String> = catalog
            .list()
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}) {}", i + 1, name))
            .collect();
        let _ = writeln!(out, "{}", p.muted(&format!("Menu: {}", menu.join(", "))));
    }
    let _ = writeln!(
        out,
        "{}",
        p.muted("add / rm <row> / qty <row> <n> / + <row> / - <row> / item <row> <menu#|name> / dough <row> corn|rice / next")
    );
    out
}

pub fn render_summary(summary: &Summary, p: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.title("Resumen del pedido"));
    for entry in &summary.entries {
        let _ = writeln!(
            out,
            "  {} {} ({})",
            p.accent(&entry.total_quantity.to_string()),
            entry.item_name,
            entry.variant
        );
    }
    let _ = writeln!(
        out,
        "Total: {}  {}",
        p.accent(&summary.grand_total.to_string()),
        p.muted(&format!("for {} people", summary.people))
    );
    let _ = writeln!(out, "{}", p.muted("restart / home / quit"));
    out
}

pub fn render_settings(catalog: &Catalog, p: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.title("Especialidades"));
    for name in catalog.list() {
        let _ = writeln!(out, "  - {}", name);
    }
    let _ = writeln!(out, "{}", p.muted("add <name> / del <name> / back"));
    out
}
