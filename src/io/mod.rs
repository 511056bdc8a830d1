// Purpose - external interfaces, final file serialization

pub mod wav;
