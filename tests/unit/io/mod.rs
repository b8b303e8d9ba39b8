mod logging;
mod visualization;
