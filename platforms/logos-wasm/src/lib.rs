pub mod error;
pub mod pipeline;

use logos_ortho::OrthographyConfig;
use logos_protocol::Element;
use logos_syntax::RealiserConfig;
use wasm_bindgen::prelude::*;

pub use error::RealiseError;
pub use pipeline::{realise, Pipeline};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: RealiseError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn tree_error(err: serde_wasm_bindgen::Error) -> JsValue {
    to_js(RealiseError::Tree(err.to_string()))
}

/// The realizer instance running in the browser.
#[wasm_bindgen]
pub struct LogosRealiser {
    pipeline: Pipeline,
}

#[wasm_bindgen]
impl LogosRealiser {
    /// `data` is a lexicon archive fetched by the page; it is validated
    /// before anything is realised with it.
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<LogosRealiser, JsValue> {
        let pipeline = Pipeline::from_archive(&data).map_err(to_js)?;
        Ok(Self { pipeline })
    }

    /// Replaces the pass settings with `{ syntax, orthography }`; missing
    /// keys keep their defaults.
    pub fn configure(&mut self, settings: JsValue) -> Result<(), JsValue> {
        let settings: Settings = serde_wasm_bindgen::from_value(settings).map_err(tree_error)?;
        self.pipeline = self
            .pipeline
            .clone()
            .with_syntax_config(settings.syntax)
            .with_orthography_config(settings.orthography);
        Ok(())
    }

    /// Element tree (as a JS object) in, finished sentence out.
    pub fn realise(&self, tree: JsValue) -> Result<String, JsValue> {
        let element: Element = serde_wasm_bindgen::from_value(tree).map_err(tree_error)?;
        Ok(self.pipeline.realise(&element))
    }

    #[wasm_bindgen(js_name = realiseJson)]
    pub fn realise_json(&self, tree: &str) -> Result<String, JsValue> {
        self.pipeline.realise_json(tree).map_err(to_js)
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub syntax: RealiserConfig,
    pub orthography: OrthographyConfig,
}
