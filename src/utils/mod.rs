pub mod gpu_buffer;
