fn main() {
	println!("cargo:rerun-if-env-changed=ENV");
	println!("cargo:rerun-if-env-changed=OFFSCREEN_DOCUMENT_PATH");

	let env = std::env::var("ENV").unwrap_or_else(|_| "Local".to_string());
	let offscreen_document_path = std::env::var("OFFSCREEN_DOCUMENT_PATH").unwrap_or_else(|_| "offscreen.html".to_string());

	println!("cargo:rustc-env=ENV={}", env);
	println!("cargo:rustc-env=OFFSCREEN_DOCUMENT_PATH={}", offscreen_document_path);
}
