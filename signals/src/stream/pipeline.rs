use thiserror::Error;

use super::input::{Input, InputError};
use super::output::{Output, OutputError};
use super::Frame;

/// A processing step between an input and an output
pub trait Step {
    type Input;
    type Output;

    /// Process the next input item.
    /// `pop_output` must then be called until it returns `None` before the
    /// next input is pushed.
    fn push_input(&mut self, input: Self::Input);

    fn pop_output(&mut self) -> Option<Self::Output>;
}

/// Frames from an input, through a step, into an output.
pub struct Pipeline<I: Input, S: Step<Input = Frame, Output = Frame>, O: Output> {
    input: I,
    step: S,
    output: O,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    InputError(#[from] InputError),
    #[error(transparent)]
    OutputError(#[from] OutputError),
}

impl<I: Input, S: Step<Input = Frame, Output = Frame>, O: Output> Pipeline<I, S, O> {
    pub fn new(input: I, step: S, output: O) -> Pipeline<I, S, O> {
        Pipeline {
            input,
            step,
            output,
        }
    }

    pub fn process_once(&mut self) -> Result<(), ProcessError> {
        self.step.push_input(self.input.next()?);
        while let Some(frame) = self.step.pop_output() {
            self.output.push(frame)?;
        }
        Ok(())
    }

    /// Process until the input ends, then hand back the output (e.g. so the
    /// caller can wait for a device to drain).
    pub fn run_to_end(mut self) -> Result<O, ProcessError> {
        loop {
            match self.process_once() {
                Ok(()) => {}
                Err(ProcessError::InputError(InputError::StreamEnded)) => return Ok(self.output),
                Err(e) => return Err(e),
            }
        }
    }
}

/// Scales every sample by a constant factor.
pub struct Gain {
    factor: f32,
    next: Option<Frame>,
}

impl Gain {
    pub fn new(factor: f32) -> Gain {
        Gain { factor, next: None }
    }
}

impl Step for Gain {
    type Input = Frame;
    type Output = Frame;

    fn push_input(&mut self, mut frame: Frame) {
        assert!(self.next.is_none());
        for s in frame.samples.iter_mut() {
            *s *= self.factor;
        }
        self.next = Some(frame);
    }

    fn pop_output(&mut self) -> Option<Frame> {
        self.next.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{SamplePath, TimeGrid};
    use crate::stream::input::PathInput;
    use crate::stream::SampleRate;

    #[derive(Default)]
    struct Collect {
        samples: Vec<f32>,
        frames: usize,
    }

    impl Output for Collect {
        fn push(&mut self, frame: Frame) -> Result<(), OutputError> {
            self.frames += 1;
            self.samples.extend(frame.samples);
            Ok(())
        }
    }

    fn counting(len: usize) -> SamplePath {
        let grid = TimeGrid::new(0., SampleRate::new(100), len);
        SamplePath::new(grid, (0..len).map(|i| i as f64).collect()).unwrap()
    }

    #[test]
    fn scales_input_into_output() {
        let path = counting(10);
        let out = Pipeline::new(PathInput::new(&path, 4), Gain::new(0.5), Collect::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.frames, 3);
        assert_eq!(
            out.samples,
            (0..10).map(|i| i as f32 * 0.5).collect::<Vec<f32>>()
        );
    }

    #[test]
    fn process_once_reports_end_of_input() {
        let path = counting(4);
        let mut pipeline = Pipeline::new(PathInput::new(&path, 4), Gain::new(1.), Collect::default());
        assert!(pipeline.process_once().is_ok());
        assert!(matches!(
            pipeline.process_once(),
            Err(ProcessError::InputError(InputError::StreamEnded))
        ));
    }
}
