use crate::audio::Chirper;
use crate::constants::*;
use crate::core::constants::{CHIRP_DURATION_SEC, MOVE_TRANSITION_MS, SHAKE_MS};
use crate::core::{AmbientHeart, Cue, Layout, Part, Particle, ParticleId, Rect, Shape};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// The page elements the session drives, and the code that applies its cues.
pub struct Stage {
    pub document: web::Document,
    pub card: web::HtmlElement,
    pub dodger: web::HtmlElement,
    pub confirm: web::HtmlElement,
    pub modal: web::HtmlElement,
    pub modal_close: web::HtmlElement,
    pub modal_ok: Option<web::HtmlElement>,
    pub name: Option<web::HtmlElement>,
    pub yay_image: Option<web::HtmlElement>,
    pub line: Option<web::HtmlElement>,
    pub bg_hearts: Option<web::HtmlElement>,
    chirper: RefCell<Chirper>,
    particles: RefCell<FnvHashMap<ParticleId, web::HtmlElement>>,
    dodger_offset: Cell<Vec2>,
}

impl Stage {
    pub fn locate(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            card: dom::element_by_id(document, CARD_ID)?,
            dodger: dom::element_by_id(document, DODGER_ID)?,
            confirm: dom::element_by_id(document, CONFIRM_ID)?,
            modal: dom::element_by_id(document, MODAL_ID)?,
            modal_close: dom::element_by_id(document, MODAL_CLOSE_ID)?,
            modal_ok: dom::optional_by_id(document, MODAL_OK_ID),
            name: dom::optional_by_selector(document, NAME_SELECTOR),
            yay_image: dom::optional_by_id(document, YAY_IMAGE_ID),
            line: dom::optional_by_id(document, PERSUASION_ID),
            bg_hearts: dom::optional_by_selector(document, BG_HEARTS_SELECTOR),
            chirper: RefCell::new(Chirper::default()),
            particles: RefCell::new(FnvHashMap::default()),
            dodger_offset: Cell::new(Vec2::ZERO),
        })
    }

    #[inline]
    pub fn container_rect(&self) -> Rect {
        dom::client_rect(&self.card)
    }

    /// Fresh measurements for one event; bounds are never cached.
    pub fn layout(&self) -> Layout {
        let container = self.container_rect();
        Layout {
            container: container.size(),
            element: dom::layout_size(&self.dodger),
            target: Some(dom::local_rect(&self.confirm, &container)),
        }
    }

    /// Dodger's natural top-left in card coordinates. Transforms, including a
    /// move transition still in flight, do not affect it.
    #[inline]
    pub fn dodger_origin(&self) -> Vec2 {
        dom::layout_offset(&self.dodger) - dom::layout_offset(&self.card)
    }

    #[inline]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.container_rect().pos()
    }

    pub fn apply(&self, cue: Cue) {
        match cue {
            Cue::AddClass(part, class) => {
                if let Some(el) = self.part(part) {
                    _ = el.class_list().add_1(class);
                }
            }
            Cue::RemoveClass(part, class) => {
                if let Some(el) = self.part(part) {
                    _ = el.class_list().remove_1(class);
                }
            }
            Cue::MoveDodger { offset } => self.move_dodger(offset),
            Cue::Shake => self.shake(),
            Cue::ShowLine { text, .. } => {
                if let Some(line) = &self.line {
                    line.set_text_content(Some(&text));
                    _ = line.class_list().add_1(LINE_SHOW_CLASS);
                }
            }
            Cue::HideLine => {
                if let Some(line) = &self.line {
                    _ = line.class_list().remove_1(LINE_SHOW_CLASS);
                }
            }
            Cue::Chirp { frequency_hz } => {
                _ = self
                    .chirper
                    .borrow_mut()
                    .chirp(frequency_hz, CHIRP_DURATION_SEC);
            }
            Cue::SpawnParticle(id, particle) => self.spawn_particle(id, &particle),
            Cue::RemoveParticle(id) => {
                if let Some(el) = self.particles.borrow_mut().remove(&id) {
                    el.remove();
                }
            }
            Cue::OpenModal => crate::overlay::show(&self.modal, &self.modal_close),
            Cue::CloseModal => crate::overlay::hide(&self.modal, &self.confirm),
            Cue::Navigate(destination) => {
                log::info!("[confirm] navigating to {}", destination);
                if let Some(w) = web::window() {
                    _ = w.location().set_href(&destination);
                }
            }
        }
    }

    fn part(&self, part: Part) -> Option<&web::HtmlElement> {
        match part {
            Part::Card => Some(&self.card),
            Part::Name => self.name.as_ref(),
            Part::Dodger => Some(&self.dodger),
            Part::Confirm => Some(&self.confirm),
            Part::YayImage => self.yay_image.as_ref(),
        }
    }

    fn dodger_transform(&self) -> String {
        let o = self.dodger_offset.get();
        format!("translate3d({}px, {}px, 0)", o.x, o.y)
    }

    fn move_dodger(&self, offset: Vec2) {
        self.dodger_offset.set(offset);
        let el = &self.dodger;
        dom::set_style(
            el,
            "transition",
            &format!("transform {}ms {}", MOVE_TRANSITION_MS, MOVE_EASING),
        );
        dom::set_style(el, "transform", &self.dodger_transform());
        dom::set_style(el, "--tx", &format!("{}px", offset.x));
        dom::set_style(el, "--ty", &format!("{}px", offset.y));
    }

    fn shake(&self) {
        let base = self.dodger_transform();
        let frames = js_sys::Array::new();
        for dx in SHAKE_OFFSETS {
            let transform = format!("{} translateX({}px)", base, dx);
            frames.push(&dom::js_object(&[("transform", JsValue::from_str(&transform))]));
        }
        let options = dom::js_object(&[
            ("duration", JsValue::from_f64(SHAKE_MS)),
            ("easing", JsValue::from_str("ease-out")),
        ]);
        _ = dom::try_animate(&self.dodger, &frames, &options);
    }

    fn spawn_particle(&self, id: ParticleId, p: &Particle) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        let (class, radius) = match p.shape {
            Shape::Heart => (format!("{} {}", PARTICLE_CLASS, PARTICLE_HEART_CLASS), HEART_RADIUS),
            Shape::Rect => (PARTICLE_CLASS.to_string(), CONFETTI_RADIUS),
        };
        el.set_class_name(&class);
        let half = p.size * 0.5;
        dom::set_style(&el, "left", &format!("{}px", p.origin.x - half));
        dom::set_style(&el, "top", &format!("{}px", p.origin.y - half));
        dom::set_style(&el, "width", &format!("{}px", p.size));
        dom::set_style(&el, "height", &format!("{}px", p.size));
        dom::set_style(&el, "background", p.color);
        dom::set_style(&el, "border-radius", radius);
        dom::set_style(&el, "transform", &format!("rotate({}deg)", p.spin_deg));
        dom::set_style(&el, "z-index", PARTICLE_Z_INDEX);
        _ = body.append_child(&el);

        let end = p.end_offset();
        let frames = js_sys::Array::new();
        frames.push(&dom::js_object(&[
            (
                "transform",
                JsValue::from_str(&format!("translate3d(0,0,0) rotate({}deg)", p.spin_deg)),
            ),
            ("opacity", JsValue::from_f64(1.0)),
        ]));
        frames.push(&dom::js_object(&[
            (
                "transform",
                JsValue::from_str(&format!(
                    "translate3d({}px, {}px, 0) rotate({}deg)",
                    end.x,
                    end.y,
                    p.spin_deg + p.rotation_deg
                )),
            ),
            ("opacity", JsValue::from_f64(if p.fade { 0.0 } else { 1.0 })),
        ]));
        let options = dom::js_object(&[
            ("duration", JsValue::from_f64(p.duration_ms)),
            ("delay", JsValue::from_f64(p.delay_ms)),
            ("easing", JsValue::from_str(PARTICLE_EASING)),
            ("fill", JsValue::from_str("forwards")),
        ]);
        _ = dom::try_animate(&el, &frames, &options);
        self.particles.borrow_mut().insert(id, el);
    }

    /// Attach background hearts; the frame loop drifts the returned elements.
    pub fn spawn_ambient(&self, hearts: Vec<AmbientHeart>) -> Vec<(web::HtmlElement, AmbientHeart)> {
        let Some(parent) = &self.bg_hearts else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(hearts.len());
        for heart in hearts {
            let Ok(el) = self.document.create_element("div") else {
                continue;
            };
            let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
                continue;
            };
            el.set_class_name(BG_HEART_CLASS);
            dom::set_style(&el, "width", &format!("{}px", heart.size));
            dom::set_style(&el, "height", &format!("{}px", heart.size));
            dom::set_style(&el, "left", &format!("{}%", heart.left_pct));
            dom::set_style(&el, "top", &format!("{}%", heart.top_pct));
            dom::set_style(
                &el,
                "animation",
                &format!(
                    "{} {}s linear {}s infinite",
                    BG_HEART_ANIMATION, heart.rise_sec, heart.delay_sec
                ),
            );
            dom::set_style(&el, "z-index", BG_HEART_Z_INDEX);
            el.set_inner_html(&format!(
                "<svg viewBox=\"0 0 32 32\" width=\"{s}\" height=\"{s}\" xmlns=\"http://www.w3.org/2000/svg\" aria-hidden=\"true\" focusable=\"false\"><path d=\"{d}\" fill=\"{c}\"/></svg>",
                s = heart.size,
                d = HEART_SVG_PATH,
                c = heart.color
            ));
            _ = parent.append_child(&el);
            out.push((el, heart));
        }
        out
    }
}
