// ABOUTME: Model artifact fixtures and mock predictors for integration tests
// ABOUTME: Writes a consistent encoder plus three model artifacts into a temporary directory

use calorie_ml_service::context::ServiceContext;
use calorie_ml_service::predictors::{ModelError, ModelSet, OutputKind, Predictor};
use calorie_ml_service::FeatureVector;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Input columns in schema order
pub const FEATURE_NAMES: [&str; 7] = [
    "age",
    "height_cm",
    "weight_kg",
    "gender",
    "activity_level",
    "goal",
    "bmi",
];

/// Request used throughout the integration tests
pub fn reference_payload() -> Value {
    json!({
        "age": 25,
        "height_cm": 180,
        "weight_kg": 75,
        "gender": "male",
        "activity_level": "moderate",
        "goal": "muscle_gain",
        "bmi": 23.15
    })
}

/// Encoder matching the serving mapping
pub fn encoder() -> Value {
    json!({
        "version": 1,
        "features": {
            "gender": {"male": 0, "female": 1},
            "activity_level": {"low": 0, "moderate": 1, "high": 2},
            "goal": {"weight_loss": 0, "muscle_gain": 1, "maintenance": 2}
        },
        "targets": {
            "diet_type": {"balanced": 0, "high_protein": 1, "low_carb": 2},
            "workout_type": {"intense": 0, "light": 1, "moderate": 2}
        }
    })
}

/// `-5*age + 6.25*height + 10*weight + 166*gender + 350*activity + 400*goal - 161`
///
/// The reference payload scores exactly 2339.
pub fn calorie_model() -> Value {
    json!({
        "kind": "linear_regression",
        "encoder_version": 1,
        "feature_names": FEATURE_NAMES,
        "coefficients": [-5.0, 6.25, 10.0, 166.0, 350.0, 400.0, 0.0],
        "intercept": -161.0
    })
}

/// Goal decides the diet: weight_loss -> low_carb, muscle_gain -> high_protein,
/// maintenance -> balanced
pub fn diet_model() -> Value {
    json!({
        "kind": "decision_tree_classifier",
        "encoder_version": 1,
        "feature_names": FEATURE_NAMES,
        "classes": [0, 1, 2],
        "nodes": [
            {"feature": 5, "threshold": 0.5, "left": 1, "right": 2},
            {"value": [0.0, 0.0, 12.0]},
            {"feature": 5, "threshold": 1.5, "left": 3, "right": 4},
            {"value": [1.0, 9.0, 0.0]},
            {"value": [7.0, 2.0, 1.0]}
        ]
    })
}

/// Activity decides the workout: low -> light, moderate -> moderate, high -> intense
pub fn workout_model() -> Value {
    json!({
        "kind": "decision_tree_classifier",
        "encoder_version": 1,
        "feature_names": FEATURE_NAMES,
        "classes": [0, 1, 2],
        "nodes": [
            {"feature": 4, "threshold": 0.5, "left": 1, "right": 2},
            {"value": [0.0, 5.0, 1.0]},
            {"feature": 4, "threshold": 1.5, "left": 3, "right": 4},
            {"value": [1.0, 0.0, 6.0]},
            {"value": [8.0, 0.0, 0.0]}
        ]
    })
}

/// Write one JSON artifact
pub fn write_json(dir: &Path, file: &str, value: &Value) {
    std::fs::write(dir.join(file), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Write the full consistent artifact set with default file names
pub fn write_model_dir(dir: &Path) {
    write_json(dir, "encoders.json", &encoder());
    write_json(dir, "calorie_model.json", &calorie_model());
    write_json(dir, "diet_model.json", &diet_model());
    write_json(dir, "workout_model.json", &workout_model());
}

/// Invocations shared by the counting mocks of one context
#[derive(Debug, Default)]
pub struct CallLog {
    calls: AtomicUsize,
    last: Mutex<Option<FeatureVector>>,
}

impl CallLog {
    /// Number of model invocations so far
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Feature vector passed to the most recent invocation
    pub fn last_features(&self) -> Option<FeatureVector> {
        *self.last.lock().unwrap()
    }

    fn record(&self, features: &FeatureVector) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(*features);
    }
}

/// Predictor returning a fixed value and logging its invocations
pub struct CountingPredictor {
    kind: OutputKind,
    feature_names: Vec<String>,
    output: f64,
    log: Arc<CallLog>,
}

impl CountingPredictor {
    pub fn new(kind: OutputKind, output: f64, log: Arc<CallLog>) -> Self {
        Self {
            kind,
            feature_names: FEATURE_NAMES.iter().map(|name| (*name).to_owned()).collect(),
            output,
            log,
        }
    }
}

impl Predictor for CountingPredictor {
    fn output_kind(&self) -> OutputKind {
        self.kind
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        self.log.record(features);
        if features.len() != self.feature_names.len() {
            return Err(ModelError::ArityMismatch {
                expected: self.feature_names.len(),
                found: features.len(),
            });
        }
        Ok(self.output)
    }
}

/// Context over counting mocks sharing one call log
pub fn counting_context(
    calories: f64,
    diet: f64,
    workout: f64,
) -> (ServiceContext, Arc<CallLog>) {
    let log = Arc::new(CallLog::default());
    let models = ModelSet::new(
        Arc::new(CountingPredictor::new(
            OutputKind::Continuous,
            calories,
            Arc::clone(&log),
        )),
        Arc::new(CountingPredictor::new(OutputKind::Class, diet, Arc::clone(&log))),
        Arc::new(CountingPredictor::new(
            OutputKind::Class,
            workout,
            Arc::clone(&log),
        )),
    );
    (ServiceContext::new(models), log)
}
