pub mod resize_handle;
