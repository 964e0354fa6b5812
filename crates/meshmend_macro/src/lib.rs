use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Wraps a `&self` method so its result is computed once and cached in
/// `self._cache`, a `RwLock<InnerCache>` with one `Option<T>` field per
/// cached method (named after the method itself).
#[proc_macro_attribute]
pub fn cache_access(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let fn_name_ident = input.sig.ident.clone();
    let fn_body = input.block;
    let fn_sig = input.sig;
    let fn_vis = input.vis;

    let expanded = quote! {
        #fn_vis #fn_sig {
            if self._cache.read().unwrap().#fn_name_ident.is_none() {
                let temp = (|| #fn_body)();
                let mut cache = self._cache.write().unwrap();
                cache.#fn_name_ident = Some(temp);
            }

            self._cache
                .read()
                .unwrap()
                .#fn_name_ident
                .as_ref()
                .unwrap()
                .clone()
        }
    };

    TokenStream::from(expanded)
}
