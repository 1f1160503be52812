use serde::Serialize;

/// One animation time-slice.
///
/// `metric`, `locations` and `labels` are parallel: index `i` in each
/// describes the same record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub year: i64,
    pub metric: Vec<Option<f64>>,
    pub locations: Vec<Option<String>>,
    pub labels: Vec<String>,
}

impl Frame {
    pub fn empty(year: i64) -> Self {
        Self {
            year,
            metric: Vec::new(),
            locations: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.metric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metric.is_empty()
    }

    pub fn name(&self) -> String {
        self.year.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub duration: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

impl Transition {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            easing: None,
        }
    }

    pub fn with_easing(duration: u32, easing: &str) -> Self {
        Self {
            duration,
            easing: Some(easing.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameTiming {
    pub duration: u32,
}

/// Options object passed as the second argument of a Plotly `animate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fromcurrent: Option<bool>,

    pub transition: Transition,
    pub frame: FrameTiming,
}

impl AnimationOptions {
    pub fn immediate(duration: u32) -> Self {
        Self {
            mode: Some("immediate".to_string()),
            fromcurrent: None,
            transition: Transition::new(duration),
            frame: FrameTiming { duration },
        }
    }

    pub fn from_current(transition_ms: u32, frame_ms: u32) -> Self {
        Self {
            mode: None,
            fromcurrent: Some(true),
            transition: Transition::new(transition_ms),
            frame: FrameTiming {
                duration: frame_ms,
            },
        }
    }
}

/// Slider entry that jumps to the frame named by `args.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderStep {
    pub label: String,
    pub method: String,
    pub args: (Vec<i64>, AnimationOptions),
}

impl SliderStep {
    pub fn target_frames(&self) -> &[i64] {
        &self.args.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_animation_options_shape() {
        let immediate = serde_json::to_value(AnimationOptions::immediate(300)).unwrap();
        assert_eq!(
            immediate,
            json!({
                "mode": "immediate",
                "transition": {"duration": 300},
                "frame": {"duration": 300}
            })
        );

        let play = serde_json::to_value(AnimationOptions::from_current(200, 400)).unwrap();
        assert_eq!(
            play,
            json!({
                "fromcurrent": true,
                "transition": {"duration": 200},
                "frame": {"duration": 400}
            })
        );
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::empty(1600);
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
        assert_eq!(frame.name(), "1600");
    }
}
