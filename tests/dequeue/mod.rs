mod backpressure;
mod hybrid;
