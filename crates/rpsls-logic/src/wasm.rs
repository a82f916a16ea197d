//! WASM bindings for a browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{Move, MoveKind, Persona, RoundVerdict, SeededRng};

/// Resolve one round from two raw move tokens
///
/// # Returns
/// JSON serialized RoundVerdict
#[wasm_bindgen]
pub fn resolve_tokens(human_token: &str, computer_token: &str) -> Result<JsValue, JsError> {
    let human = MoveKind::parse(human_token).map_err(|e| JsError::new(&e.to_string()))?;
    let computer = MoveKind::parse(computer_token).map_err(|e| JsError::new(&e.to_string()))?;

    let verdict = RoundVerdict::of(Move::new(human), Move::new(computer));

    serde_wasm_bindgen::to_value(&verdict)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct PersonaInfo {
    id: Persona,
    name: String,
    description: String,
}

/// Get all available personas
#[wasm_bindgen]
pub fn get_personas() -> Result<JsValue, JsError> {
    let personas: Vec<PersonaInfo> = Persona::ALL
        .into_iter()
        .map(|persona| PersonaInfo {
            id: persona,
            name: persona.name().to_string(),
            description: persona.describe(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&personas)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Let a persona choose its next move
///
/// # Arguments
/// * `persona_name` - Display name, e.g. "Number 5"
/// * `history_json` - JSON array of the persona's past moves, e.g. `["rock"]`
/// * `seed` - Seed for this draw; see `new_seed`
#[wasm_bindgen]
pub fn persona_choose(persona_name: &str, history_json: &str, seed: u64) -> Result<String, JsError> {
    let persona: Persona = persona_name
        .parse()
        .map_err(|e: crate::UnknownPersona| JsError::new(&e.to_string()))?;
    let history: Vec<Move> = serde_json::from_str(history_json)
        .map_err(|e| JsError::new(&format!("Invalid history: {}", e)))?;

    let mut rng = SeededRng::from_u64(seed);
    Ok(persona.choose(&history, &mut rng).name().to_string())
}

/// Fresh seed from the browser's entropy
#[wasm_bindgen]
pub fn new_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (high << 32) | low
}
