pub mod worldview;
