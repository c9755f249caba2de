//! linefield - replay a scripted editing session against one text field
//!
//! Prints the resulting field state. Set RUST_LOG=debug to see each
//! step's state change.

use anyhow::{Context, Result};
use clap::Parser;

use linefield::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use linefield::config::FieldConfig;
use linefield::field::TextField;
use linefield::keymap::{
    embedded_bindings, load_default_keymap, load_keymap_file, merge_bindings, KeyDispatcher,
    Keymap,
};
use linefield::measure::{FontMeasure, MonospaceMeasure};
use linefield::script::Session;

mod cli;

use cli::CliArgs;

fn main() -> Result<()> {
    linefield::tracing::init();
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => FieldConfig::load_from(path)?,
        None => FieldConfig::load(),
    };

    let session = Session::load(&args.script)?;

    let mut field = match &args.font {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to read font {}", path.display()))?;
            let measure = FontMeasure::from_bytes(&data, args.font_size)?;
            TextField::from_config(0, &config, measure)
        }
        None => TextField::from_config(0, &config, MonospaceMeasure::new(config.char_width)),
    };
    session.prepare(&mut field);

    let bindings = match &args.keymap {
        Some(path) => {
            let user = load_keymap_file(path)
                .with_context(|| format!("Failed to load keymap {}", path.display()))?;
            merge_bindings(embedded_bindings(), user)
        }
        None => load_default_keymap(),
    };
    let dispatcher = KeyDispatcher::new(Keymap::with_bindings(bindings));

    let mut clipboard: Box<dyn Clipboard> = if args.system_clipboard {
        Box::new(SystemClipboard)
    } else {
        Box::new(MemoryClipboard::new())
    };

    session.replay(&mut field, &dispatcher, clipboard.as_mut())?;

    print_state(&field);
    Ok(())
}

fn print_state(field: &TextField) {
    let engine = field.engine();
    let view = field.render_state();

    println!("text:      {:?}", engine.text());
    println!("cursor:    {}", engine.cursor());
    println!("anchor:    {}", engine.anchor());
    println!("selected:  {:?}", engine.selected_text());
    println!("scroll:    {}", engine.scroll_offset());
    println!("visible:   {:?}", view.visible_text);
    println!(
        "history:   {} undo / {} redo",
        engine.history().undo_count(),
        engine.history().redo_count()
    );
}
