use crate::constants::CHIRP_PEAK_GAIN;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Short best-effort tones. The context is created on first use so it is
/// born inside a user gesture.
#[derive(Default)]
pub struct Chirper {
    ctx: Option<web::AudioContext>,
}

impl Chirper {
    fn context(&mut self) -> Result<&web::AudioContext, JsValue> {
        if self.ctx.is_none() {
            self.ctx = Some(web::AudioContext::new()?);
        }
        match self.ctx.as_ref() {
            Some(ctx) => Ok(ctx),
            None => Err(JsValue::NULL),
        }
    }

    // Sine blip with a fast attack and linear release
    pub fn chirp(&mut self, frequency_hz: f32, duration_sec: f64) -> Result<(), JsValue> {
        let ctx = self.context()?;
        _ = ctx.resume();
        let src = web::OscillatorNode::new(ctx)?;
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(frequency_hz);
        let g = web::GainNode::new(ctx)?;
        g.gain().set_value(0.0);
        let t0 = ctx.current_time() + 0.005;
        g.gain().linear_ramp_to_value_at_time(CHIRP_PEAK_GAIN, t0 + 0.01)?;
        g.gain()
            .linear_ramp_to_value_at_time(0.0, t0 + duration_sec)?;
        src.connect_with_audio_node(&g)?;
        g.connect_with_audio_node(&ctx.destination())?;
        src.start_with_when(t0)?;
        src.stop_with_when(t0 + duration_sec + 0.02)?;
        Ok(())
    }
}
