// WASM bindings for fastspell.
//
// Provides a `WasmSpellChecker` class exported via wasm-bindgen that wraps
// the `SpellChecker` handle. Dictionary text can be passed directly or
// through JavaScript callbacks that are invoked once at load time.
//
// Usage from JavaScript:
//
//   const checker = new WasmSpellChecker(affText, dicText);
//   checker.check("hello");          // => true
//   checker.suggest("helo");         // => ["hello", ...]
//   checker.reload(otherAff, otherDic);
//   checker.cacheStats();            // => { checkEntries: 2, ... }
//
//   const lazy = WasmSpellChecker.fromProviders(() => aff, () => dic);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use fastspell::{CacheStats, LoadError, Source, SourceError, SpellChecker};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of cache statistics.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCacheStats {
    check_entries: usize,
    suggestion_entries: usize,
    affix_entries: usize,
    check_hits: u64,
    check_misses: u64,
}

impl From<CacheStats> for JsCacheStats {
    fn from(s: CacheStats) -> Self {
        Self {
            check_entries: s.check_entries,
            suggestion_entries: s.suggestion_entries,
            affix_entries: s.affix_entries,
            check_hits: s.check_hits,
            check_misses: s.check_misses,
        }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn load_error_to_js(e: LoadError) -> JsError {
    JsError::new(&e.to_string())
}

/// Wrap a JS callback returning the file text as a deferred source.
fn js_source(provider: js_sys::Function) -> Source {
    Source::provider(move || {
        let value = provider
            .call0(&JsValue::NULL)
            .map_err(|e| SourceError::Provider(format!("{e:?}")))?;
        value
            .as_string()
            .ok_or_else(|| SourceError::Provider("provider did not return a string".to_string()))
    })
}

// ============================================================================
// WasmSpellChecker
// ============================================================================

/// Hunspell-compatible spell checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmSpellChecker {
    checker: SpellChecker,
}

#[wasm_bindgen]
impl WasmSpellChecker {
    /// Create a checker from the text of an `.aff` and a `.dic` file.
    #[wasm_bindgen(constructor)]
    pub fn new(aff: &str, dic: &str) -> WasmSpellChecker {
        WasmSpellChecker {
            checker: SpellChecker::from_text(aff, dic),
        }
    }

    /// Create a checker whose dictionary text comes from two callbacks.
    ///
    /// Each callback must return a string. A throwing callback or a
    /// non-string result is reported as an error.
    #[wasm_bindgen(js_name = "fromProviders")]
    pub fn from_providers(
        aff: js_sys::Function,
        dic: js_sys::Function,
    ) -> Result<WasmSpellChecker, JsError> {
        let checker =
            SpellChecker::from_sources(js_source(aff), js_source(dic)).map_err(load_error_to_js)?;
        Ok(WasmSpellChecker { checker })
    }

    /// Check whether a word is correctly spelled.
    pub fn check(&self, word: &str) -> bool {
        self.checker.check(word)
    }

    /// Generate spelling suggestions for a misspelled word, best first.
    pub fn suggest(&self, word: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.checker.suggest(word))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the dictionary with new `.aff` and `.dic` text.
    pub fn reload(&mut self, aff: &str, dic: &str) {
        self.checker.load_text(aff, dic);
    }

    /// Replace the dictionary using two callbacks.
    ///
    /// On error the current dictionary stays in place.
    #[wasm_bindgen(js_name = "reloadFromProviders")]
    pub fn reload_from_providers(
        &mut self,
        aff: js_sys::Function,
        dic: js_sys::Function,
    ) -> Result<(), JsError> {
        self.checker
            .load_dictionary(js_source(aff), js_source(dic))
            .map_err(load_error_to_js)
    }

    /// Number of distinct words stored in the dictionary.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.checker.dictionary().word_count()
    }

    /// Set the maximum number of suggestions to return.
    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.checker.set_max_suggestions(value);
    }

    /// Drop all cached check and suggestion results.
    #[wasm_bindgen(js_name = "clearCaches")]
    pub fn clear_caches(&self) {
        self.checker.clear_caches();
    }

    /// Current cache occupancy as
    /// `{ checkEntries, suggestionEntries, affixEntries, checkHits, checkMisses }`.
    #[wasm_bindgen(js_name = "cacheStats")]
    pub fn cache_stats(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&JsCacheStats::from(self.checker.cache_stats()))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {}
}
