pub mod engine;
pub mod hooks;
pub mod mapper;
pub mod time;
pub mod types;
pub mod value;

pub use engine::{AxisContext, AxisEngine, AxisSpec};
pub use hooks::{
    CreateRangeFn, CreateTicksFn, FormatDateFn, FormatValueFn, MinSpanFn, RangeShapeParams,
    TickShapeParams, ValueTransform,
};
pub use time::{TimeAxis, TimeAxisEngine, TimeAxisOverride, format_timestamp_by_weight};
pub use types::{AxisGap, AxisPosition, AxisRange, AxisTick, TickValue};
pub use value::{ValueAxis, ValueAxisEngine, ValueAxisOverride};
