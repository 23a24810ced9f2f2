// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Paints the four canonical looks of a [`ValidatedTextInput`] one under the other, so
//! they can be eyeballed in a real terminal.
//!
//! ```sh
//! cargo run --example preview
//! tail -f design_system_log.txt
//! ```

use std::io::{Write, stdout};

use crossterm::{cursor::MoveTo,
                queue,
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;
use r3bl_design_system::{CommonResult, CrosstermSurface, RowIndex,
                         ValidatedTextInput, ValidatedTextInputConfig, col, ok, row,
                         try_initialize_logging_global, width};

const PREVIEW_WIDTH: u16 = 32;

/// The first field is inset on both sides, the rest use the full width.
const INSET: u16 = 4;

struct Preview {
    config: ValidatedTextInputConfig,
    inset: u16,
}

fn previews() -> Vec<Preview> {
    let on_change = |it: &str| tracing::info!(message = "on_change", len = %it.len());
    vec![
        Preview {
            config: ValidatedTextInputConfig::new("Text field", on_change),
            inset: INSET,
        },
        Preview {
            config: ValidatedTextInputConfig::new("Text field with text", on_change)
                .with_initial_value("Example"),
            inset: 0,
        },
        Preview {
            config: ValidatedTextInputConfig::new("Text field with error", on_change)
                .with_is_error(true),
            inset: 0,
        },
        Preview {
            config: ValidatedTextInputConfig::new("Text field with error", on_change)
                .with_is_error(true)
                .with_error_message("error"),
            inset: 0,
        },
    ]
}

fn main() -> CommonResult<()> {
    try_initialize_logging_global(tracing::Level::DEBUG)?;

    let mut stdout = stdout();
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0)).into_diagnostic()?;

    let mut next_row = row(0);
    for Preview { config, inset } in previews() {
        let mut field = ValidatedTextInput::mount(&config);
        let origin = col(inset) + next_row;
        let mut surface =
            CrosstermSurface::new(&mut stdout, origin, width(PREVIEW_WIDTH - 2 * inset));
        field.render(&config, &mut surface)?;

        // The field, and a blank row.
        next_row = RowIndex::from(
            next_row.as_u16() + field.measured_size().row_height.as_u16() + 1,
        );
    }

    queue!(stdout, MoveTo(0, next_row.as_u16())).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;
    ok!()
}
