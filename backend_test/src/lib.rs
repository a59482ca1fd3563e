use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, FnArg, Ident, ItemFn, Pat, Signature, Type};

/// Transform an asynchronous test into a synchronous one and inject
/// dependencies backed by an in-memory civic backend.
///
/// Injectable dependencies are [`rocket::local::asynchronous::Client`] and
/// `crate::civic::StubBackend`; the latter shares its call log with the one
/// managed by the client's Rocket instance.
///
/// `#[backend_test(failing)]` uses a backend that rejects every request.
#[proc_macro_attribute]
pub fn backend_test(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    // Extract the injected arguments and reject invalid function signatures.
    let test_args = match check_sig(item_fn.sig.clone()) {
        Ok(args) => args,
        Err(err) => {
            return err.into_compile_error().into();
        }
    };

    // Rename the future so the test can have its original name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_fut", name);
    item_fn.sig.ident = new_name.clone();

    // Pick the backend flavour.
    let backend = if args.is_empty() {
        quote! { crate::civic::StubBackend::example() }
    } else {
        let arg = parse_macro_input!(args as Ident);
        if arg == "failing" {
            quote! { crate::civic::StubBackend::failing() }
        } else {
            return syn::Error::new(arg.span(), "Expected no argument or `failing`")
                .into_compile_error()
                .into();
        }
    };

    // Rewrite the test function.
    quote! {
        #[test]
        fn #name() {
            /// Test setup.
            async fn setup() -> (rocket::local::asynchronous::Client, crate::civic::StubBackend) {
                log4rs_test_utils::test_logging::init_logging_once_for(
                    vec!["gvote"],
                    None,
                    None,
                );
                let backend = #backend;
                let managed: crate::civic::Backend = Box::new(backend.clone());
                let rocket_client = rocket::local::asynchronous::Client::tracked(crate::rocket_for_backend(managed))
                    .await
                    .unwrap();

                (rocket_client, backend)
            }

            /// The test itself.
            #item_fn

            let runtime = rocket::tokio::runtime::Builder::new_multi_thread()
                .thread_name("rocket-worker-test-thread")
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                #[allow(unused_variables)]
                let (rocket_client, backend) = setup().await;
                #new_name(#(#test_args),*).await;
            });
        }
    }
    .into()
}

/// Ensure the wrapped test is async, work out which parameters to inject, and
/// reject unknown parameters.
fn check_sig(sig: Signature) -> Result<Vec<TokenStream2>, syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new(sig.span(), "Test must be marked `async`"));
    }

    let mut has_client = false;
    let mut has_backend = false;
    let mut args = vec![];

    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            if let Pat::Ident(_) = &*pat_type.pat {
                if let Type::Path(type_path) = &*pat_type.ty {
                    // Valid as the last path segment for any type is itself.
                    let type_ident = &type_path.path.segments.last().unwrap().ident;
                    if type_ident == "Client" {
                        if has_client {
                            return Err(syn::Error::new(input.span(), "Test cannot accept more than one `rocket::local::asynchronous::Client`"));
                        }
                        has_client = true;
                        args.push(quote! { rocket_client });
                        continue;
                    } else if type_ident == "StubBackend" {
                        if has_backend {
                            return Err(syn::Error::new(
                                input.span(),
                                "Test cannot accept more than one `StubBackend`",
                            ));
                        }
                        has_backend = true;
                        args.push(quote! { backend });
                        continue;
                    }
                }
            }
        }

        return Err(syn::Error::new(
            input.span(),
            "Expected one of `client_ident: Client` or `backend_ident: StubBackend`",
        ));
    }

    Ok(args)
}
