use yew::prelude::*;

const ORDER_FIELDS: [(&str, &str, &str, &str); 9] = [
    ("Full Name *", "text", "fullName", "Enter your name"),
    ("Email Address *", "email", "email", "Enter your email"),
    ("Phone Number *", "tel", "phone", "(123) 456-7890"),
    ("Street Address *", "text", "address", ""),
    ("City *", "text", "city", ""),
    ("State *", "text", "state", "Select State"),
    ("ZIP Code *", "text", "zip", ""),
    ("EV Type *", "text", "evType", "Rivian, Ford, etc."),
    ("Comment (Optional)", "text", "comment", "Enter your message"),
];

fn field(label: &'static str, kind: &'static str, name: &'static str, placeholder: &'static str) -> Html {
    html! {
        <label key={name}>
            {label}
            <input type={kind} name={name} placeholder={placeholder} />
        </label>
    }
}

/// Pre-order and newsletter forms. Nothing is submitted anywhere.
#[function_component(PreOrder)]
pub fn pre_order() -> Html {
    let (contact, address) = ORDER_FIELDS.split_at(3);

    html! {
        <section class="preorder" aria-label="Pre-order and newsletter">
            <div class="preorderInner">
                <div class="preorderCard preorderForm">
                    <div class="preorderHeader">
                        <h2>{"Pre-Order Form"}</h2>
                        <p>{"Tell us a bit about you and your EV. We'll follow up shortly."}</p>
                    </div>
                    <div class="preorderGrid">
                        { contact.iter().map(|&(l, k, n, p)| field(l, k, n, p)).collect::<Html>() }
                        <label class="accountType">
                            {"Account Type *"}
                            <div class="accountButtons">
                                <button type="button" class="accountBtn active">{"Personal"}</button>
                                <button type="button" class="accountBtn">{"Company"}</button>
                            </div>
                        </label>
                        { address.iter().map(|&(l, k, n, p)| field(l, k, n, p)).collect::<Html>() }
                    </div>
                    <button type="button" class="preorderSubmit">{"Submit Pre-Order"}</button>
                </div>

                <div class="preorderCard preorderSubscribe">
                    <div>
                        <h3>{"Subscribe to receive future updates from EVBUDDY"}</h3>
                        <p>{"You will receive important updates, promotions, and many more cool stuffs from us once you subscribe."}</p>
                    </div>
                    { field("Name", "text", "subName", "Enter your name") }
                    { field("Email", "email", "subEmail", "Enter your email") }
                    <button type="button" class="subscribeBtn">{"Subscribe"}</button>
                    <p class="subscribeNote">{"No spam guaranteed, so please don't send any spam mail."}</p>
                </div>
            </div>
        </section>
    }
}
