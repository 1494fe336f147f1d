//! Terminal render target.

use std::io::{self, Write};

use crate::render::{Card, RenderTarget};

/// Renders cards as numbered text blocks on a writer.
///
/// "Clearing" a terminal stream just resets the numbering and starts a new
/// block; scrollback is left alone.
pub struct TextTarget<W: Write> {
    out: W,
    count: usize,
}

impl TextTarget<io::Stdout> {
    /// A target writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextTarget<W> {
    /// Creates a target writing to the given writer.
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    /// Consumes the target and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderTarget for TextTarget<W> {
    fn clear(&mut self) {
        self.count = 0;
        let _ = writeln!(self.out);
    }

    fn append_card(&mut self, card: Card) {
        self.count += 1;
        let out = &mut self.out;
        let _ = match card {
            Card::Web(card) => {
                writeln!(out, "{}. {}", self.count, card.title)
                    .and_then(|_| writeln!(out, "   {}", card.display_link))
                    .and_then(|_| writeln!(out, "   {}", card.snippet))
                    .and_then(|_| {
                        writeln!(
                            out,
                            "   {} | {} | {}",
                            card.source, card.date, card.category_label
                        )
                    })
            }
            Card::Image(card) => {
                writeln!(out, "{}. [image] {}", self.count, card.title)
                    .and_then(|_| writeln!(out, "   {}", card.image_url))
                    .and_then(|_| writeln!(out, "   {} | {}", card.dimensions, card.source))
            }
            Card::News(card) => {
                writeln!(out, "{}. {}", self.count, card.title)
                    .and_then(|_| writeln!(out, "   {}", card.link))
                    .and_then(|_| writeln!(out, "   {}", card.snippet))
                    .and_then(|_| writeln!(out, "   {} | {}", card.source, card.date))
            }
            Card::Notice(card) => writeln!(out, "-- {} --", card.title)
                .and_then(|_| writeln!(out, "   {}", card.body)),
        };
        let _ = self.out.flush();
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            let _ = writeln!(self.out, "Searching...");
            let _ = self.out.flush();
        }
    }
}
