//! Candle BERT sentence encoder.
//!
//! Wraps `candle_transformers`'s [`BertModel`] with mean pooling over the token
//! dimension, producing one fixed-length sentence vector per input. This is the
//! standard pooling for all-MiniLM-class sentence-transformer checkpoints.

use std::path::Path;

use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};

pub struct BertEncoder {
    model: BertModel,
    hidden_size: usize,
}

impl BertEncoder {
    /// Loads a BERT checkpoint from `config.json` + `model.safetensors`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let hidden_size = config.hidden_size;
        let model = BertModel::load(vb, &config)?;

        Ok(Self { model, hidden_size })
    }

    /// Encodes one tokenized sequence into a mean-pooled sentence vector.
    ///
    /// `input_ids` and `token_type_ids` are shaped `[1, seq_len]`.
    pub fn encode(&self, input_ids: &Tensor, token_type_ids: &Tensor) -> Result<Vec<f32>> {
        // hidden_states: [1, seq_len, hidden_size]
        let hidden_states = self.model.forward(input_ids, token_type_ids, None)?;
        let (_batch, seq_len, _hidden) = hidden_states.dims3()?;

        let pooled = (hidden_states.sum(1)? / (seq_len as f64))?;
        pooled.squeeze(0)?.to_vec1::<f32>()
    }

    /// The checkpoint's hidden size (and therefore the embedding dimension).
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }
}
