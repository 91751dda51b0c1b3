// WASM bindings for Lampung Aksara transliteration.
//
// Provides a `WasmLampungify` class exported via wasm-bindgen that wraps the
// `AksaraHandle` from lampungify-aksara. Structured return values are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const lampung = new WasmLampungify();
//   lampung.toAksara("sikam haga mengan");  // => "sikm/ hg meGA"
//   lampung.toLatin("sikm/ hg meGA");       // => "sikam haga mengan"
//   lampung.syllabify("animal");            // => ["a", "ni", "mal"]
//   lampung.syllabifyText("ha ga");         // => [["ha"], ["ga"]]
//   lampung.font("Lampung Kaganga");        // => { class: "lampung-kaganga" }
//   lampung.setVowelPairExceptions(["ai", "au", "ua"]);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lampungify_aksara::{AksaraError, AksaraHandle, FontClass};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a font class.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFontClass {
    class: &'static str,
}

impl From<FontClass> for JsFontClass {
    fn from(font: FontClass) -> Self {
        JsFontClass { class: font.class }
    }
}

fn aksara_error_to_js(e: AksaraError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmLampungify
// ============================================================================

/// Lampung Aksara transliteration engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmLampungify {
    handle: AksaraHandle,
}

impl Default for WasmLampungify {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmLampungify {
    /// Create an instance with the default diphthongs ("ai", "au").
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmLampungify {
        WasmLampungify {
            handle: AksaraHandle::new(),
        }
    }

    /// Encode Latin text as aksara marker text.
    #[wasm_bindgen(js_name = "toAksara")]
    pub fn to_aksara(&self, text: &str) -> String {
        self.handle.to_aksara(text)
    }

    /// Decode aksara marker text back to Latin (best effort).
    #[wasm_bindgen(js_name = "toLatin")]
    pub fn to_latin(&self, marker_text: &str) -> String {
        self.handle.to_latin(marker_text)
    }

    /// Split one word into syllables.
    ///
    /// Returns a JavaScript array of strings.
    pub fn syllabify(&self, word: &str) -> js_sys::Array {
        self.handle
            .syllabify(word)
            .iter()
            .map(|s| JsValue::from_str(s))
            .collect()
    }

    /// Split text on spaces and syllabify each word.
    ///
    /// Returns a JavaScript array with one array of syllables per word.
    #[wasm_bindgen(js_name = "syllabifyText")]
    pub fn syllabify_text(&self, text: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.handle.syllabify_text(text))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Resolve a font display name to `{ class }`. Missing or unknown names
    /// give the Suarnadipa class.
    pub fn font(&self, name: Option<String>) -> Result<JsValue, JsError> {
        let class = JsFontClass::from(self.handle.font(name.as_deref()));
        serde_wasm_bindgen::to_value(&class).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the vowel pairs kept together as diphthongs.
    ///
    /// Throws if an entry is not exactly two vowels; the previous set is kept.
    #[wasm_bindgen(js_name = "setVowelPairExceptions")]
    pub fn set_vowel_pair_exceptions(&mut self, pairs: Vec<String>) -> Result<(), JsError> {
        self.handle
            .set_vowel_pair_exceptions(&pairs)
            .map_err(aksara_error_to_js)
    }

    /// The current diphthongs, sorted.
    #[wasm_bindgen(js_name = "vowelPairExceptions")]
    pub fn vowel_pair_exceptions(&self) -> Vec<String> {
        self.handle.vowel_pair_exceptions()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        AksaraHandle::get_version().to_string()
    }
}
