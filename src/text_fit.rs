//! Bar / text / bar space allocation.
//!
//! A horizontal span is split into a leading bar, a text label and a trailing
//! bar. When the measured text doesn't fit, the label degrades one rung at a
//! time:
//!
//! 1. **Full**: the text as given.
//! 2. **Abbreviated**: the initials of each word (`"A VERY LONG LABEL"` becomes
//!    `"A.V.L.L."`), only tried for more than two words.
//! 3. **Hidden**: no text; the leading bar fills the whole span.
//!
//! Hidden always succeeds, so [`fit`] never fails. Both bars of a result that
//! shows text are at least `min_bar_width` wide.

use crate::log::debug;
use crate::render::defaults;
use crate::types::MeasuredText;

/// Which rung of the degradation ladder a fit ended on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextMode {
    Full,
    Abbreviated,
    Hidden,
}

/// Layout constraints for a single fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    /// Neither bar may end up narrower than this.
    pub min_bar_width: f64,
    /// Space kept between the text and each bar.
    pub gap: f64,
    pub allow_abbreviation: bool,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            min_bar_width: defaults::MIN_BAR_WIDTH,
            gap: defaults::TEXT_GAP,
            allow_abbreviation: true,
        }
    }
}

impl FitParams {
    pub fn with_min_bar_width(mut self, min_bar_width: f64) -> Self {
        self.min_bar_width = min_bar_width;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_abbreviation(mut self, allow: bool) -> Self {
        self.allow_abbreviation = allow;
        self
    }
}

/// Where the bars and the label ended up.
#[derive(Clone, Debug, PartialEq)]
pub struct FitResult {
    pub mode: TextMode,
    /// The label to draw; empty when hidden.
    pub text: String,
    /// Left edge of the label.
    pub text_x: f64,
    pub text_width: f64,
    /// Height carried over from the measurement; 0 when hidden or unknown.
    pub text_height: f64,
    pub bar1_x: f64,
    pub bar1_width: f64,
    pub bar2_x: f64,
    pub bar2_width: f64,
}

impl FitResult {
    /// Text hidden, leading bar across the whole span.
    fn hidden(space_start: f64, available: f64) -> Self {
        Self {
            mode: TextMode::Hidden,
            text: String::new(),
            text_x: space_start,
            text_width: 0.0,
            text_height: 0.0,
            bar1_x: space_start,
            bar1_width: available,
            bar2_x: space_start + available,
            bar2_width: 0.0,
        }
    }

    pub fn shows_text(&self) -> bool {
        self.mode != TextMode::Hidden
    }

    pub fn is_abbreviated(&self) -> bool {
        self.mode == TextMode::Abbreviated
    }

    pub fn text_end(&self) -> f64 {
        self.text_x + self.text_width
    }

    pub fn text_center(&self) -> f64 {
        self.text_x + self.text_width / 2.0
    }
}

/// Initials of each word, each followed by a period.
///
/// Returns `None` for two words or fewer, where initials carry too little
/// meaning to be worth showing.
pub fn abbreviate(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 2 {
        return None;
    }
    Some(
        words
            .iter()
            .filter_map(|w| w.chars().next())
            .flat_map(|c| [c, '.'])
            .collect(),
    )
}

/// Split `[space_start, space_end]` into bar, text and bar.
///
/// `measured_text_width` is the host's measurement of `full_text`. The
/// abbreviated form is not re-measured: its width is estimated by scaling the
/// full width by the ratio of character counts, which can misjudge fits at
/// the margin for proportional fonts.
pub fn fit(
    space_start: f64,
    space_end: f64,
    full_text: &str,
    measured_text_width: f64,
    params: &FitParams,
) -> FitResult {
    let available = (space_end - space_start).max(0.0);
    let text_area = available - 2.0 * params.min_bar_width - 2.0 * params.gap;

    let Some((mode, text, text_width)) =
        choose_text(full_text, measured_text_width, text_area, params)
    else {
        debug!(available, text_area, "text hidden");
        return FitResult::hidden(space_start, available);
    };

    // Center the label between the two minimum bars
    let region_start = space_start + params.min_bar_width + params.gap;
    let region_width = text_area;
    let text_x = region_start + (region_width - text_width) / 2.0;
    let text_end = text_x + text_width;

    let bar1_x = space_start;
    let bar1_width = text_x - params.gap - space_start;
    let bar2_x = text_end + params.gap;
    let bar2_width = space_end - bar2_x;

    // Rounding on an exact fit can land a hair under the minimum
    if bar1_width < params.min_bar_width || bar2_width < params.min_bar_width {
        debug!(bar1_width, bar2_width, "bars below minimum after centering, hiding text");
        return FitResult::hidden(space_start, available);
    }

    debug!(?mode, text_width, bar1_width, bar2_width, "text fitted");
    FitResult {
        mode,
        text,
        text_x,
        text_width,
        text_height: 0.0,
        bar1_x,
        bar1_width,
        bar2_x,
        bar2_width,
    }
}

/// [`fit`] for a full measurement; the height is passed through to the result.
pub fn fit_measured(
    space_start: f64,
    space_end: f64,
    full_text: &str,
    measured: MeasuredText,
    params: &FitParams,
) -> FitResult {
    let mut result = fit(space_start, space_end, full_text, measured.width, params);
    if result.shows_text() {
        result.text_height = measured.height;
    }
    result
}

/// Walk the ladder down to the first rung that fits; `None` means hidden.
fn choose_text(
    full_text: &str,
    measured_width: f64,
    text_area: f64,
    params: &FitParams,
) -> Option<(TextMode, String, f64)> {
    if full_text.is_empty() {
        return None;
    }
    if measured_width <= text_area {
        return Some((TextMode::Full, full_text.to_string(), measured_width));
    }
    if !params.allow_abbreviation {
        return None;
    }

    let short = abbreviate(full_text)?;
    let full_len = full_text.chars().count();
    let short_len = short.chars().count();
    if short_len >= full_len {
        return None;
    }

    let estimate = measured_width * short_len as f64 / full_len as f64;
    debug!(%short, estimate, text_area, "trying abbreviation");
    (estimate <= text_area).then_some((TextMode::Abbreviated, short, estimate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(min_bar_width: f64, gap: f64) -> FitParams {
        FitParams::default()
            .with_min_bar_width(min_bar_width)
            .with_gap(gap)
    }

    fn assert_invariant(result: &FitResult, available: f64, min_bar: f64) {
        if result.shows_text() {
            assert!(!result.text.is_empty());
            assert!(result.bar1_width >= min_bar, "{result:?}");
            assert!(result.bar2_width >= min_bar, "{result:?}");
        } else {
            assert!(result.text.is_empty());
            assert_eq!(result.text_width, 0.0);
            assert_eq!(result.bar1_width, available);
            assert_eq!(result.bar2_width, 0.0);
        }
    }

    #[test]
    fn abbreviation_needs_more_than_two_words() {
        assert_eq!(abbreviate("WARP CORE"), None);
        assert_eq!(abbreviate("ENGINEERING"), None);
        assert_eq!(abbreviate(""), None);
        assert_eq!(abbreviate("A VERY LONG LABEL HERE").as_deref(), Some("A.V.L.L.H."));
        assert_eq!(abbreviate("  deck   seven  aft ").as_deref(), Some("d.s.a."));
    }

    #[test]
    fn full_text_centered_when_it_fits() {
        let result = fit(0.0, 200.0, "STATUS", 50.0, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Full);
        assert_eq!(result.text, "STATUS");
        // Region [25, 175], text centered
        assert_eq!(result.text_x, 75.0);
        assert_eq!(result.text_end(), 125.0);
        assert_eq!(result.text_center(), 100.0);
        assert_eq!(result.bar1_x, 0.0);
        assert_eq!(result.bar1_width, 70.0);
        assert_eq!(result.bar2_x, 130.0);
        assert_eq!(result.bar2_width, 70.0);
    }

    #[test]
    fn exact_fit_leaves_minimum_bars() {
        let result = fit(10.0, 210.0, "STATUS", 150.0, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Full);
        assert_eq!(result.bar1_width, 20.0);
        assert_eq!(result.bar2_width, 20.0);
        assert_eq!(result.bar2_x, 190.0);
    }

    #[test]
    fn off_origin_exact_fit_never_shortens_a_bar() {
        for start in [0.396, 0.1, 3.7, 1234.567] {
            let result = fit(start, start + 200.0, "STATUS", 150.0, &params(20.0, 5.0));
            assert_invariant(&result, (start + 200.0) - start, 20.0);
        }
    }

    #[test]
    fn long_text_is_abbreviated() {
        let result = fit(0.0, 200.0, "A VERY LONG LABEL HERE", 180.0, &params(20.0, 5.0));
        assert!(result.is_abbreviated());
        assert_eq!(result.text, "A.V.L.L.H.");
        let expected = 180.0 * 10.0 / 22.0;
        assert!((result.text_width - expected).abs() < 1e-9);
        assert_invariant(&result, 200.0, 20.0);
    }

    #[test]
    fn abbreviation_estimate_too_wide_hides_text() {
        // Abbreviation is 10/22 of 400 = 181.8, still over 150
        let result = fit(0.0, 200.0, "A VERY LONG LABEL HERE", 400.0, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Hidden);
        assert_eq!(result.bar1_width, 200.0);
        assert_eq!(result.bar2_width, 0.0);
        assert_eq!(result.text, "");
    }

    #[test]
    fn disallowed_abbreviation_hides_text() {
        let p = params(20.0, 5.0).with_abbreviation(false);
        let result = fit(0.0, 200.0, "A VERY LONG LABEL HERE", 180.0, &p);
        assert_eq!(result.mode, TextMode::Hidden);
        assert_invariant(&result, 200.0, 20.0);
    }

    #[test]
    fn two_word_text_cannot_abbreviate() {
        let result = fit(0.0, 100.0, "WARP CORE", 90.0, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Hidden);
    }

    #[test]
    fn abbreviation_that_does_not_shorten_is_rejected() {
        // Three one-letter words: "A B C" (5 chars) vs "A.B.C." (6 chars)
        let result = fit(0.0, 100.0, "A B C", 80.0, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Hidden);
    }

    #[test]
    fn empty_text_is_hidden() {
        let result = fit(0.0, 100.0, "", 0.0, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Hidden);
        assert_invariant(&result, 100.0, 20.0);
    }

    #[test]
    fn span_too_small_for_bars_hides_text() {
        let result = fit(0.0, 30.0, "X", 1.0, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Hidden);
        assert_eq!(result.bar1_width, 30.0);
    }

    #[test]
    fn nan_measurement_hides_text() {
        let result = fit(0.0, 300.0, "A VERY LONG LABEL HERE", f64::NAN, &params(20.0, 5.0));
        assert_eq!(result.mode, TextMode::Hidden);
        assert_invariant(&result, 300.0, 20.0);
    }

    #[test]
    fn fit_measured_carries_height() {
        let measured = MeasuredText::new(50.0, 14.0);
        let shown = fit_measured(0.0, 200.0, "STATUS", measured, &FitParams::default());
        assert_eq!(shown.text_height, 14.0);
        let hidden = fit_measured(0.0, 40.0, "STATUS", measured, &FitParams::default());
        assert_eq!(hidden.text_height, 0.0);
    }

    #[test]
    fn invariant_holds_across_spans() {
        let texts = [
            ("ALERT", 40.0),
            ("SENSOR ARRAY ONLINE", 150.0),
            ("LONG RANGE SENSOR ARRAY ONLINE", 260.0),
        ];
        for start in [0.0, 13.5, 250.0] {
            for len in (0..60).map(|i| i as f64 * 7.25) {
                for min_bar in [0.0, 8.0, 20.0] {
                    for gap in [0.0, 3.0, 5.0] {
                        for (text, width) in texts {
                            let p = params(min_bar, gap);
                            let result = fit(start, start + len, text, width, &p);
                            assert_invariant(&result, (start + len) - start, min_bar);
                            assert_eq!(result, fit(start, start + len, text, width, &p));
                        }
                    }
                }
            }
        }
    }
}
