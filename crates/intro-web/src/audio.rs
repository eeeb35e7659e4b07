use intro_core::{AMBIENT_RAMP_SEC, DRONE_FREQ_HZ, LFO_DEPTH_HZ, LFO_FREQ_HZ};
use web_sys as web;

/// Lazily constructed drone synthesis graph. The oscillators run for the
/// page's lifetime; audibility is controlled entirely by ramping
/// `master_gain` between zero and the on-target.
pub struct AmbientGraph {
    pub audio_ctx: web::AudioContext,
    pub master_gain: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_sine(
    audio_ctx: &web::AudioContext,
    freq_hz: f32,
    label: &str,
) -> Result<web::OscillatorNode, ()> {
    match web::OscillatorNode::new(audio_ctx) {
        Ok(osc) => {
            osc.set_type(web::OscillatorType::Sine);
            osc.frequency().set_value(freq_hz);
            Ok(osc)
        }
        Err(e) => {
            log::error!("{} OscillatorNode error: {:?}", label, e);
            Err(())
        }
    }
}

pub fn build_ambient_graph() -> Result<AmbientGraph, ()> {
    let audio_ctx = web::AudioContext::new().map_err(|e| {
        log::error!("AudioContext error: {:?}", e);
    })?;

    // Master starts silent; toggling only ever ramps this one node.
    let master_gain = create_gain(&audio_ctx, 0.0, "Master")?;
    _ = master_gain.connect_with_audio_node(&audio_ctx.destination());

    let drone = create_sine(&audio_ctx, DRONE_FREQ_HZ, "Drone")?;

    // Slow LFO wobbles the drone frequency by a few hertz.
    let lfo = create_sine(&audio_ctx, LFO_FREQ_HZ, "LFO")?;
    let lfo_gain = create_gain(&audio_ctx, LFO_DEPTH_HZ, "LFO depth")?;
    _ = lfo.connect_with_audio_node(&lfo_gain);
    _ = lfo_gain.connect_with_audio_param(&drone.frequency());

    _ = drone.connect_with_audio_node(&master_gain);

    _ = drone.start();
    _ = lfo.start();

    Ok(AmbientGraph {
        audio_ctx,
        master_gain,
    })
}

impl AmbientGraph {
    /// Ramp the master gain to `target`, canceling any in-flight ramp.
    /// Always scheduled from the audio clock's current time.
    pub fn ramp_master_gain(&self, target: f32) {
        let now = self.audio_ctx.current_time();
        let gain = self.master_gain.gain();
        _ = gain.cancel_scheduled_values(now);
        _ = gain.linear_ramp_to_value_at_time(target, now + AMBIENT_RAMP_SEC);
    }
}
