mod explain;
mod init;
mod templates;
