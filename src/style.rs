//! Global stylesheet - injected once as a `<style>` block
//!
//! Layout, palette and type live in static CSS; hover/press motion is
//! generated from `HoverMotion` so it shares units with the rest of the
//! motion code.

use crate::primitives::HoverMotion;

const FONTS_CSS: &str = r#"
@font-face { font-family: "Helvetica Now Display"; src: url("/fonts/HelveticaNowDisplay-Regular.otf") format("opentype"); font-weight: 400; font-style: normal; font-display: swap; }
@font-face { font-family: "Helvetica Now Display"; src: url("/fonts/HelveticaNowDisplay-Bold.otf") format("opentype"); font-weight: 700; font-style: normal; font-display: swap; }
"#;

const BASE_CSS: &str = r#"
:root {
  --mai-teal: #1ba3a0;
  --mai-blue: #1f6fb5;
  --mai-orange: #e0782f;
  --mai-heading: #11273a;
  --mai-text: #3b4450;
  --mai-light: #f2f3f5;
  --mai-line: #dde1e6;
  --font-helvetica-now: "Helvetica Now Display", "Helvetica Neue", Arial, sans-serif;
}
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; overflow-x: hidden; }
body { font-family: var(--font-helvetica-now); color: var(--mai-text); background: #fff; -webkit-font-smoothing: antialiased; }
img { max-width: 100%; }
p { margin: 0; }
h1, h2, h3 { margin: 0; }

.page { background: #fff; color: var(--mai-text); }
.artboard { overflow-x: clip; }
.container-1140 { width: 100%; max-width: 1140px; margin: 0 auto; padding: 0 24px; }
.full-bleed { width: 100vw; position: relative; left: 50%; margin-left: -50vw; }
.block { display: block; }
.line-clip { overflow: hidden; }
.w-full { width: 100%; }
.h-auto { height: auto; }
.text-center { text-align: center; }
.text-white { color: #fff; }
.px-6 { padding-left: 24px; padding-right: 24px; }
.pt-10 { padding-top: 40px; }
.mt-3 { margin-top: 12px; }
.mt-4 { margin-top: 16px; }
.mt-6 { margin-top: 24px; }
.mt-7 { margin-top: 28px; }
.mt-9 { margin-top: 36px; }
.stack-1 > * + * { margin-top: 4px; }
.stack-3 > * + * { margin-top: 12px; }
.stack-5 > * + * { margin-top: 20px; }

.text-mai-heading { color: var(--mai-heading); }
.text-mai-teal { color: var(--mai-teal); }
.text-mai-blue { color: var(--mai-blue); }
.text-mai-orange { color: var(--mai-orange); }
.bg-mai-teal { background: var(--mai-teal); }
.bg-mai-blue { background: var(--mai-blue); }
.bg-mai-orange { background: var(--mai-orange); }
.bg-mai-light { background: var(--mai-light); }
.bg-white { background: #fff; }
.text-slate { color: #5a636d; }
.text-mist { color: #7f8790; }
.text-fog { color: #8b939c; }
.note { text-align: center; font-style: italic; color: #8a919a; }

.type-h1 { font-size: 40px; line-height: 46px; font-weight: 700; letter-spacing: -0.02em; }
.type-h2 { font-size: 34px; line-height: 40px; font-weight: 700; letter-spacing: -0.015em; }
.type-subhead { font-size: 21px; line-height: 30px; }
.type-body { font-size: 17px; line-height: 27px; }
.type-small { font-size: 14px; line-height: 20px; }
.main-heading { margin-bottom: 32px; }
@media (min-width: 768px) {
  .type-h1 { font-size: 56px; line-height: 62px; }
  .type-h2 { font-size: 44px; line-height: 50px; }
}

.site-header { position: sticky; top: 0; z-index: 50; background: rgba(255,255,255,0.8); backdrop-filter: blur(12px); -webkit-backdrop-filter: blur(12px); }
.site-nav { display: flex; height: 112px; align-items: flex-start; justify-content: center; padding-top: 24px; }
.logo-link { display: inline-flex; }
.logo { width: 224px; height: auto; }

.story { margin-bottom: 88px; }
.story-flush { margin-bottom: 0; }
.band-pad { padding-top: 56px; padding-bottom: 56px; }
.band-pad-tight { padding-top: 48px; padding-bottom: 48px; }
.band-pad-wide { padding-top: 64px; padding-bottom: 64px; }
.narrow-910 { max-width: 910px; margin: 0 auto; }

.expand-track { display: flex; justify-content: center; overflow: hidden; }
.expand-frame { overflow: hidden; }
.expand-img { display: block; width: 100%; height: auto; }

.image-band { overflow: hidden; }
.band-img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.object-center { object-position: center; }
.object-top { object-position: top; }
.band-overlay { position: absolute; inset: 0; }
.band-content { position: relative; display: grid; place-items: center; text-align: center; }
.band-note { margin-top: 8px; font-style: italic; color: rgba(255,255,255,0.85); }
.min-h-420 { min-height: 420px; }
.min-h-560 { min-height: 560px; }
.min-h-620 { min-height: 620px; }
@media (min-width: 768px) {
  .min-h-560 { min-height: 640px; }
  .min-h-620 { min-height: 700px; }
}
.tagline { font-size: 76px; line-height: 1; font-style: italic; letter-spacing: -0.02em; color: #fff; }
@media (min-width: 768px) { .tagline { font-size: 96px; } }

.mai-cta { display: inline-flex; height: 56px; align-items: center; justify-content: center; padding: 0 32px; border-radius: 9999px; font-size: 18px; line-height: 22px; font-weight: 700; color: #fff !important; text-decoration: none; }
.cta-block { width: 100%; margin-top: auto; padding: 0 24px; }

.audience-heading { font-size: 29px; line-height: 36px; font-weight: 700; }
.grid-audience { display: grid; grid-template-columns: 1fr; gap: 24px; }
.audience-card { position: relative; isolation: isolate; display: block; width: 100%; overflow: hidden; border-radius: 10px; cursor: pointer; }
.audience-label { pointer-events: none; position: absolute; left: 0; right: 0; bottom: 0; padding: 32px 12px 16px; background: linear-gradient(to top, rgba(0,0,0,0.55), rgba(0,0,0,0.15), transparent); }
.audience-label p { text-align: center; font-size: 18px; line-height: 24px; font-weight: 500; color: #fff; }

.grid-products { display: grid; grid-template-columns: 1fr; gap: 20px; }
.product-card { display: flex; min-height: 560px; flex-direction: column; border: 1px solid var(--mai-line); border-radius: 12px; background: #f7f7f8; padding: 32px; cursor: pointer; }
.product-title { font-size: 24px; line-height: 30px; font-weight: 700; }
@media (min-width: 768px) { .product-title { font-size: 26px; line-height: 32px; } }
.product-divider { height: 1px; margin: 20px 0; background: var(--mai-line); }

.grid-points { margin-top: 40px; display: grid; grid-template-columns: 1fr; gap: 16px; }
.point-card { display: flex; height: 100%; flex-direction: column; border: 1px solid var(--mai-line); border-radius: 12px; background: #f7f7f8; padding: 24px; cursor: pointer; }
.point-icon-slot { display: flex; height: 60px; align-items: flex-end; }
.point-icon { transition: transform 300ms ease-out; }
.point-card:hover .point-icon { transform: translateY(-4px) scale(1.05) rotate(-2deg); }
.icon-60 { width: 60px; height: 60px; object-fit: contain; }
.point-title { margin-top: 16px; font-size: 25px; line-height: 30px; font-weight: 700; }

.grid-logos-wide { margin-top: 40px; display: grid; grid-template-columns: repeat(2, 1fr); align-items: center; gap: 32px 24px; }
.grid-logos-narrow { max-width: 760px; margin: 32px auto 0; display: grid; grid-template-columns: 1fr; align-items: center; gap: 32px 24px; }
.logo-cell { display: flex; align-items: center; justify-content: center; }
.client-logo { width: auto; height: auto; max-width: 205px; opacity: 0.7; }
.grid-logos-narrow .client-logo { max-width: 195px; }

.site-footer { background: linear-gradient(180deg, #042032 0%, #021621 100%); color: #c5ccd3; }
.footer-pad { padding: 56px 24px 32px; }
.grid-footer { display: grid; grid-template-columns: 1fr; gap: 32px; }
.footer-heading { font-size: 20px; line-height: 28px; font-weight: 700; color: #e9edf1; }
.footer-text { font-size: 15px; line-height: 24px; }
.contact-row { display: flex; align-items: center; gap: 8px; }
.contact-row-top { align-items: flex-start; }
.contact-row-top .icon { margin-top: 4px; }
.social-row { display: flex; align-items: center; gap: 16px; }
.social-row a { color: inherit; }
.icon { display: inline-flex; flex-shrink: 0; }
.icon svg { width: 100%; height: 100%; }
.icon-20 { width: 20px; height: 20px; }
.icon-28 { width: 28px; height: 28px; }
.footer-legal { margin-top: 32px; padding-top: 28px; border-top: 1px solid rgba(255,255,255,0.25); }
.footer-legal-row { display: flex; flex-direction: column; gap: 8px; font-size: 15px; line-height: 24px; }
.footer-watermark { margin-top: 40px; text-align: center; font-size: 44px; line-height: 1; font-style: italic; letter-spacing: -0.03em; color: rgba(255,255,255,0.08); }

@media (min-width: 640px) {
  .grid-audience { grid-template-columns: repeat(2, 1fr); }
  .grid-points { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 768px) {
  .grid-logos-wide { grid-template-columns: repeat(3, 1fr); }
  .grid-logos-narrow { grid-template-columns: repeat(3, 1fr); }
  .grid-footer { grid-template-columns: repeat(2, 1fr); }
  .footer-watermark { font-size: 58px; }
}
@media (min-width: 1024px) {
  .grid-audience { grid-template-columns: repeat(4, 1fr); }
  .footer-legal-row { flex-direction: row; align-items: center; justify-content: space-between; }
}
@media (min-width: 1280px) {
  .grid-products { grid-template-columns: repeat(3, 1fr); }
  .grid-points { grid-template-columns: repeat(4, 1fr); }
  .grid-logos-wide { grid-template-columns: repeat(5, 1fr); }
  .grid-footer { grid-template-columns: repeat(4, 1fr); }
}
@media (prefers-reduced-motion: reduce) {
  * { transition-duration: 0ms !important; transition-delay: 0ms !important; }
}
"#;

/// Interactive blocks and the motion they get on hover/press
const HOVER_TARGETS: &[(&str, HoverMotion)] = &[
    (".mai-cta", HoverMotion::BUTTON),
    (".audience-card", HoverMotion::AUDIENCE_CARD),
    (".product-card", HoverMotion::PRODUCT_CARD),
    (".point-card", HoverMotion::POINT_CARD),
];

/// The complete stylesheet
pub fn stylesheet() -> String {
    let mut css = String::with_capacity(FONTS_CSS.len() + BASE_CSS.len() + 1024);
    css.push_str(FONTS_CSS);
    css.push_str(BASE_CSS);
    for (selector, motion) in HOVER_TARGETS {
        css.push_str(&motion.rules(selector));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_fonts_and_layout() {
        let css = stylesheet();
        assert!(css.contains("HelveticaNowDisplay-Bold.otf"));
        assert!(css.contains("font-display: swap"));
        assert!(css.contains(".container-1140 {"));
        assert!(css.contains(".line-clip { overflow: hidden; }"));
    }

    #[test]
    fn every_hover_target_has_rules() {
        let css = stylesheet();
        for (selector, _) in HOVER_TARGETS {
            assert!(css.contains(&format!("{selector}:hover {{")), "{selector} missing hover");
            assert!(css.contains(&format!("{selector}:active {{")), "{selector} missing press");
        }
    }
}
