//! Cell-accurate text clipping for the chart. Bars live in a virtual
//! content strip wider than the screen; each row is described as styled
//! segments in content coordinates and clipped to the visible window here.

use ratatui::style::Style;
use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Truncate `text` to at most `width` display cells, on grapheme
/// boundaries.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out
}

/// Cells `[from, to)` of `text`. A wide grapheme cut by either edge is
/// replaced by spaces so the slice always has width `min(to, width) - from`.
pub fn cell_slice(text: &str, from: usize, to: usize) -> String {
    let mut out = String::new();
    let mut pos = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        let (start, end) = (pos, pos + w);
        pos = end;
        if end <= from {
            continue;
        }
        if start >= to {
            break;
        }
        if start >= from && end <= to {
            out.push_str(grapheme);
        } else {
            // partially visible wide grapheme
            let visible = end.min(to) - start.max(from);
            for _ in 0..visible {
                out.push(' ');
            }
        }
    }
    out
}

/// Clip styled segments (in content-strip cells) to the window
/// `[offset, offset + width)`, producing spans for one screen row.
pub fn clip_segments(segments: &[(String, Style)], offset: usize, width: usize) -> Vec<Span<'static>> {
    let to = offset + width;
    let mut spans = Vec::new();
    let mut pos = 0;
    for (text, style) in segments {
        let w = display_width(text);
        let (start, end) = (pos, pos + w);
        pos = end;
        if end <= offset {
            continue;
        }
        if start >= to {
            break;
        }
        let slice_from = offset.saturating_sub(start);
        let slice_to = to.min(end) - start;
        let piece = cell_slice(text, slice_from, slice_to);
        if !piece.is_empty() {
            spans.push(Span::styled(piece, *style));
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_to_width_breaks_on_graphemes() {
        assert_eq!(fit_to_width("hello", 3), "hel");
        assert_eq!(fit_to_width("hello", 10), "hello");
        // wide CJK chars are 2 cells each
        assert_eq!(fit_to_width("日本語", 4), "日本");
        assert_eq!(fit_to_width("日本語", 5), "日本");
    }

    #[test]
    fn cell_slice_plain_ascii() {
        assert_eq!(cell_slice("abcdef", 1, 4), "bcd");
        assert_eq!(cell_slice("abcdef", 0, 6), "abcdef");
        assert_eq!(cell_slice("abcdef", 4, 100), "ef");
    }

    #[test]
    fn cell_slice_cut_wide_grapheme_becomes_space() {
        // "日" occupies cells [0,2); slicing from 1 cuts it in half
        assert_eq!(cell_slice("日本", 1, 4), " 本");
        assert_eq!(cell_slice("日本", 0, 3), "日 ");
    }

    #[test]
    fn clip_segments_windows_across_boundaries() {
        let style = Style::default();
        let segments = vec![
            ("aaaa".to_string(), style),
            ("bbbb".to_string(), style),
            ("cccc".to_string(), style),
        ];
        let spans = clip_segments(&segments, 2, 6);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "aabbbb");
    }

    #[test]
    fn clip_segments_entirely_before_window_yields_nothing() {
        let style = Style::default();
        let segments = vec![("aa".to_string(), style)];
        assert!(clip_segments(&segments, 10, 5).is_empty());
    }
}
