// 領域層：單字群組、結果集合與查詢介面，不做任何 I/O

pub mod model;
pub mod ports;
